use tree_sitter::Node;

use loupe_core::types::{LifecycleHooks, MethodInfo, MethodParam, Visibility};

use crate::walk::node_text;

use super::types::resolve_type;
use super::{ExtractCtx, ExtractResult};

/// Superclass names that mark a class-style component, matched directly or
/// as the property of a member access (`React.Component`).
const COMPONENT_BASES: &[&str] = &["Component", "PureComponent"];

/// Lifecycle flags and the method inventory of a class-style component.
/// Classes with an unrecognized (or absent) superclass are ignored.
pub(crate) fn collect(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    if !extends_component_base(node, ctx.src) {
        return Ok(());
    }
    let Some(body) = node.child_by_field_name("body") else {
        return Ok(());
    };

    let mut cursor = body.walk();
    let members: Vec<Node> = body
        .named_children(&mut cursor)
        .filter(|m| m.kind() == "method_definition")
        .collect();

    for member in members {
        let Some(name_node) = member.child_by_field_name("name") else {
            continue;
        };
        let name = node_text(name_node, ctx.src);
        let is_static = has_modifier(member, "static");
        mark_lifecycle(name, is_static, &mut ctx.structure.lifecycle);

        let visibility = if name.starts_with('_') {
            Visibility::Private
        } else {
            Visibility::Public
        };
        if visibility == Visibility::Private && !ctx.config.include_private_methods {
            continue;
        }

        let return_type = member
            .child_by_field_name("return_type")
            .and_then(|t| t.named_child(0))
            .map(|t| resolve_type(t, ctx.src))
            .unwrap_or_else(|| "unknown".to_string());

        ctx.structure.methods.push(MethodInfo {
            name: name.to_string(),
            parameters: method_params(member, ctx.src),
            return_type,
            is_async: has_modifier(member, "async"),
            visibility,
        });
    }

    Ok(())
}

fn extends_component_base(class_node: Node<'_>, src: &str) -> bool {
    let mut cursor = class_node.walk();
    let Some(heritage) = class_node
        .children(&mut cursor)
        .find(|c| c.kind() == "class_heritage")
    else {
        return false;
    };
    let mut heritage_cursor = heritage.walk();
    let Some(extends) = heritage
        .children(&mut heritage_cursor)
        .find(|c| c.kind() == "extends_clause")
    else {
        return false;
    };
    let Some(value) = extends.child_by_field_name("value") else {
        return false;
    };

    let base = match value.kind() {
        "identifier" => node_text(value, src),
        "member_expression" => value
            .child_by_field_name("property")
            .map(|p| node_text(p, src))
            .unwrap_or(""),
        _ => "",
    };
    COMPONENT_BASES.contains(&base)
}

fn has_modifier(member: Node<'_>, keyword: &str) -> bool {
    let mut cursor = member.walk();
    let found = member.children(&mut cursor).any(|c| c.kind() == keyword);
    found
}

fn mark_lifecycle(name: &str, is_static: bool, lifecycle: &mut LifecycleHooks) {
    match name {
        "constructor" => lifecycle.construction = true,
        "componentDidMount" => lifecycle.mount = true,
        "componentDidUpdate" => lifecycle.update = true,
        "componentWillUnmount" => lifecycle.unmount = true,
        "componentDidCatch" => lifecycle.error_capture = true,
        "getDerivedStateFromProps" if is_static => lifecycle.derived_state = true,
        _ => {}
    }
}

fn method_params(member: Node<'_>, src: &str) -> Vec<MethodParam> {
    let Some(params) = member.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if !matches!(param.kind(), "required_parameter" | "optional_parameter") {
            continue;
        }
        let name = param
            .child_by_field_name("pattern")
            .map(|p| node_text(p, src).to_string())
            .unwrap_or_default();
        let param_type = param
            .child_by_field_name("type")
            .and_then(|t| t.named_child(0))
            .map(|t| resolve_type(t, src))
            .unwrap_or_else(|| "unknown".to_string());
        out.push(MethodParam {
            name,
            param_type,
            optional: param.kind() == "optional_parameter",
        });
    }
    out
}
