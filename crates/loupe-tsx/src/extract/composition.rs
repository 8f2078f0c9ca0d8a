use tree_sitter::Node;

use crate::walk::node_text;

use super::{ExtractCtx, ExtractResult};

/// Record composition relations from one markup element: component-cased tag
/// names (set semantics) and render-prop attributes.
pub(crate) fn collect(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    let tag_owner = match node.kind() {
        "jsx_self_closing_element" => node,
        _ => match node.child_by_field_name("open_tag") {
            Some(open) => open,
            None => return Ok(()),
        },
    };

    // Fragments (`<>`) have no name
    let Some(name_node) = tag_owner.child_by_field_name("name") else {
        return Ok(());
    };
    let tag = node_text(name_node, ctx.src);
    if tag.chars().next().is_some_and(|c| c.is_uppercase()) {
        ctx.structure
            .composition
            .child_components
            .insert(tag.to_string());
    }

    let mut cursor = tag_owner.walk();
    let attributes: Vec<Node> = tag_owner
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "jsx_attribute")
        .collect();

    for attribute in attributes {
        let Some(attr_name) = attribute.named_child(0) else {
            continue;
        };
        let attr_name_text = node_text(attr_name, ctx.src);
        if attr_name_text == "render" || has_inline_function_value(attribute) {
            ctx.structure
                .composition
                .render_prop_names
                .push(attr_name_text.to_string());
        }
    }

    Ok(())
}

/// `prop={(x) => ...}` or `prop={function (x) {...}}`
fn has_inline_function_value(attribute: Node<'_>) -> bool {
    attribute
        .named_child(1)
        .filter(|value| value.kind() == "jsx_expression")
        .and_then(|value| value.named_child(0))
        .is_some_and(|inner| matches!(inner.kind(), "arrow_function" | "function_expression"))
}
