use tree_sitter::Node;

use loupe_core::types::PropEntry;

use crate::walk::node_text;

use super::interfaces::object_type_props;
use super::{ExtractCtx, ExtractResult};

/// An identifier names a UI component when its first character is uppercase.
pub(crate) fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

/// `function Card(...) {...}`: props from the first parameter when the name
/// is component-cased.
pub(crate) fn collect_declaration(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    let Some(name) = node.child_by_field_name("name") else {
        return Ok(());
    };
    if !is_component_name(node_text(name, ctx.src)) {
        return Ok(());
    }
    if let Some(params) = node.child_by_field_name("parameters") {
        props_from_parameters(params, ctx);
    }
    Ok(())
}

/// `const Card = (...) => ...`: same recognition applied to function-valued
/// declarators.
pub(crate) fn collect_declarator(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    let (Some(name), Some(value)) = (
        node.child_by_field_name("name"),
        node.child_by_field_name("value"),
    ) else {
        return Ok(());
    };
    if name.kind() != "identifier" || !is_component_name(node_text(name, ctx.src)) {
        return Ok(());
    }
    if matches!(value.kind(), "arrow_function" | "function_expression") {
        if let Some(params) = value.child_by_field_name("parameters") {
            props_from_parameters(params, ctx);
        }
    }
    Ok(())
}

/// Props from the first parameter of a recognized component function.
///
/// An inline object-type annotation wins over the destructuring pattern; a
/// bare destructuring pattern yields untyped, always-required entries.
fn props_from_parameters(params: Node<'_>, ctx: &mut ExtractCtx<'_>) {
    let mut cursor = params.walk();
    let Some(first) = params
        .named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "required_parameter" | "optional_parameter"))
    else {
        return;
    };

    if let Some(annotation) = first.child_by_field_name("type") {
        if let Some(ty) = annotation.named_child(0) {
            if ty.kind() == "object_type" {
                object_type_props(ty, ctx);
            }
        }
        // A named annotation is resolved by the interface extractor instead.
        return;
    }

    if let Some(pattern) = first.child_by_field_name("pattern") {
        if pattern.kind() == "object_pattern" {
            props_from_object_pattern(pattern, ctx);
        }
    }
}

fn props_from_object_pattern(pattern: Node<'_>, ctx: &mut ExtractCtx<'_>) {
    let mut cursor = pattern.walk();
    let entries: Vec<Node> = pattern.named_children(&mut cursor).collect();
    for entry in entries {
        match entry.kind() {
            "shorthand_property_identifier_pattern" => {
                ctx.structure
                    .props
                    .push(PropEntry::untyped(node_text(entry, ctx.src)));
            }
            "pair_pattern" => {
                if let Some(key) = entry.child_by_field_name("key") {
                    ctx.structure
                        .props
                        .push(PropEntry::untyped(node_text(key, ctx.src)));
                }
            }
            "object_assignment_pattern" => {
                let Some(left) = entry.child_by_field_name("left") else {
                    continue;
                };
                // Defaults do not demote the entry to optional; the default
                // text is retained alongside required=true.
                let mut prop = PropEntry::untyped(node_text(left, ctx.src));
                prop.default_value = entry
                    .child_by_field_name("right")
                    .map(|r| node_text(r, ctx.src).to_string());
                ctx.structure.props.push(prop);
            }
            _ => {}
        }
    }
}
