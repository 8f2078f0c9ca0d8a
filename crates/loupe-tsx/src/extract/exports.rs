use tree_sitter::Node;

use crate::walk::node_text;

use super::{ExtractCtx, ExtractResult};

/// Record one export statement. A default export only flips `hasDefault`;
/// named exports (declarations, clauses, re-exports) append to `named`
/// without de-duplication.
pub(crate) fn collect(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    let mut cursor = node.walk();
    if node.children(&mut cursor).any(|c| c.kind() == "default") {
        ctx.structure.exports.has_default = true;
        return Ok(());
    }

    if let Some(decl) = node.child_by_field_name("declaration") {
        collect_declaration_names(decl, ctx);
    }

    let mut cursor = node.walk();
    let clauses: Vec<Node> = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "export_clause")
        .collect();
    for clause in clauses {
        let mut inner = clause.walk();
        let specs: Vec<Node> = clause
            .named_children(&mut inner)
            .filter(|s| s.kind() == "export_specifier")
            .collect();
        for spec in specs {
            // `export { Badge as Chip }` exposes the alias, not the local name
            let exported = spec
                .child_by_field_name("alias")
                .or_else(|| spec.child_by_field_name("name"));
            if let Some(name) = exported {
                ctx.structure
                    .exports
                    .named
                    .push(node_text(name, ctx.src).to_string());
            }
        }
    }

    Ok(())
}

fn collect_declaration_names(decl: Node<'_>, ctx: &mut ExtractCtx<'_>) {
    match decl.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "class_declaration"
        | "abstract_class_declaration"
        | "interface_declaration"
        | "type_alias_declaration"
        | "enum_declaration" => {
            if let Some(name) = decl.child_by_field_name("name") {
                ctx.structure
                    .exports
                    .named
                    .push(node_text(name, ctx.src).to_string());
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = decl.walk();
            let declarators: Vec<Node> = decl
                .named_children(&mut cursor)
                .filter(|d| d.kind() == "variable_declarator")
                .collect();
            for declarator in declarators {
                if let Some(name) = declarator.child_by_field_name("name") {
                    if name.kind() == "identifier" {
                        ctx.structure
                            .exports
                            .named
                            .push(node_text(name, ctx.src).to_string());
                    }
                }
            }
        }
        _ => {}
    }
}
