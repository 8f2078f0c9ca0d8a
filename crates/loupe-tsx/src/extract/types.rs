use tree_sitter::Node;

use crate::walk::node_text;

/// Resolve a type node to a canonical display string.
///
/// Minimal by design: primitives keep their keyword, named references keep
/// their identifier text, unions join with `|`, arrays append `[]`, and
/// anything else resolves to `unknown`. Recursion is bounded by the type's
/// own nesting depth.
pub(crate) fn resolve_type(node: Node<'_>, src: &str) -> String {
    match node.kind() {
        "type_annotation" | "parenthesized_type" => node
            .named_child(0)
            .map(|inner| resolve_type(inner, src))
            .unwrap_or_else(|| "unknown".to_string()),
        "predefined_type" => match node_text(node, src) {
            keyword @ ("string" | "number" | "boolean" | "void") => keyword.to_string(),
            _ => "unknown".to_string(),
        },
        "type_identifier" | "nested_type_identifier" => node_text(node, src).to_string(),
        "union_type" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .map(|member| resolve_type(member, src))
                .collect::<Vec<_>>()
                .join("|")
        }
        "array_type" => node
            .named_child(0)
            .map(|element| format!("{}[]", resolve_type(element, src)))
            .unwrap_or_else(|| "unknown[]".to_string()),
        _ => "unknown".to_string(),
    }
}
