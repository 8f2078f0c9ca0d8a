use tree_sitter::Node;

use loupe_core::types::PropEntry;

use crate::walk::node_text;

use super::types::resolve_type;
use super::{ExtractCtx, ExtractResult};

/// Interface-shaped prop sets: any type/interface declaration whose name ends
/// in `Props` or `Properties` is scanned field by field.
pub(crate) fn collect(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    let Some(name) = node.child_by_field_name("name") else {
        return Ok(());
    };
    let name_text = node_text(name, ctx.src);
    if !(name_text.ends_with("Props") || name_text.ends_with("Properties")) {
        return Ok(());
    }

    match node.kind() {
        "interface_declaration" => {
            if let Some(body) = node.child_by_field_name("body") {
                object_type_props(body, ctx);
            }
        }
        "type_alias_declaration" => {
            if let Some(value) = node.child_by_field_name("value") {
                if value.kind() == "object_type" {
                    object_type_props(value, ctx);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Flatten an object-type or interface body into prop entries, one per
/// property signature; `required` mirrors the absence of the `?` marker.
pub(crate) fn object_type_props(members: Node<'_>, ctx: &mut ExtractCtx<'_>) {
    let mut cursor = members.walk();
    let signatures: Vec<Node> = members
        .named_children(&mut cursor)
        .filter(|m| m.kind() == "property_signature")
        .collect();

    for signature in signatures {
        let Some(name) = signature.child_by_field_name("name") else {
            continue;
        };
        let prop_type = signature
            .child_by_field_name("type")
            .and_then(|t| t.named_child(0))
            .map(|t| resolve_type(t, ctx.src))
            .unwrap_or_else(|| "unknown".to_string());

        ctx.structure.props.push(PropEntry {
            name: node_text(name, ctx.src).to_string(),
            prop_type,
            required: !is_optional(signature),
            default_value: None,
            description: None,
        });
    }
}

fn is_optional(signature: Node<'_>) -> bool {
    let mut cursor = signature.walk();
    let found = signature.children(&mut cursor).any(|c| c.kind() == "?");
    found
}
