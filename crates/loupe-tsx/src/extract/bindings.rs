use tree_sitter::Node;

use loupe_core::types::{Binding, BindingKind};

use crate::walk::node_text;

use super::{ExtractCtx, ExtractError, ExtractResult};

/// Callee prefixes that mark a higher-order wrapping call.
const WRAPPER_PREFIXES: &[&str] = &["with", "connect", "memo", "forwardRef"];

/// The reserved binding-call naming convention: `use` + capitalized word.
/// One-letter suffixes (`useX`) are too short to be real hooks.
pub(crate) fn is_binding_name(name: &str) -> bool {
    name.len() > 4 && name.starts_with("use") && name.as_bytes()[3].is_ascii_uppercase()
}

fn classify_binding(name: &str) -> BindingKind {
    match name {
        "useState" => BindingKind::State,
        "useEffect" | "useLayoutEffect" => BindingKind::Effect,
        "useContext" => BindingKind::Context,
        "useRef" => BindingKind::Ref,
        "useMemo" => BindingKind::Memoized,
        "useCallback" => BindingKind::DerivedCallback,
        _ => BindingKind::Other,
    }
}

fn is_literal_kind(kind: &str) -> bool {
    matches!(
        kind,
        "number" | "string" | "template_string" | "true" | "false" | "null" | "undefined"
            | "array" | "object"
    )
}

/// Classify one call expression: binding calls by the `use` convention,
/// higher-order wrappers by callee prefix.
pub(crate) fn collect(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    let callee = node
        .child_by_field_name("function")
        .ok_or(ExtractError::MissingField("function"))?;
    let name = match callee.kind() {
        "identifier" => node_text(callee, ctx.src),
        "member_expression" => callee
            .child_by_field_name("property")
            .map(|p| node_text(p, ctx.src))
            .unwrap_or(""),
        _ => return Ok(()),
    };
    if name.is_empty() {
        return Ok(());
    }

    if WRAPPER_PREFIXES.iter().any(|p| name.starts_with(p)) {
        ctx.structure
            .composition
            .wrapper_names
            .push(name.to_string());
    }

    if !is_binding_name(name) {
        return Ok(());
    }

    let kind = classify_binding(name);
    let args: Vec<Node> = node
        .child_by_field_name("arguments")
        .map(|a| {
            let mut cursor = a.walk();
            a.named_children(&mut cursor).collect()
        })
        .unwrap_or_default();

    let dependencies = match kind {
        BindingKind::Effect | BindingKind::Memoized | BindingKind::DerivedCallback => args
            .get(1)
            .filter(|a| a.kind() == "array")
            .map(|deps| {
                let mut cursor = deps.walk();
                deps.named_children(&mut cursor)
                    .filter(|e| e.kind() == "identifier")
                    .map(|e| node_text(e, ctx.src).to_string())
                    .collect()
            }),
        _ => None,
    };

    let initial_value = match kind {
        BindingKind::State => args
            .first()
            .filter(|a| is_literal_kind(a.kind()))
            .map(|a| node_text(*a, ctx.src).to_string()),
        _ => None,
    };

    ctx.structure.bindings.push(Binding {
        name: name.to_string(),
        kind,
        dependencies,
        initial_value,
    });
    Ok(())
}
