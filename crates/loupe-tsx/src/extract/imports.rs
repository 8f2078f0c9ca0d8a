use tree_sitter::Node;

use crate::walk::{self, node_text};

use super::{ExtractCtx, ExtractResult};

/// Record one import statement: internal vs external by the leading `.`,
/// type-only imports flagged separately, and composition markers for
/// `forwardRef`/`memo` specifiers.
pub(crate) fn collect(node: Node<'_>, ctx: &mut ExtractCtx<'_>) -> ExtractResult {
    // `import foo = require(...)` has no source field; nothing to record.
    let Some(source) = node.child_by_field_name("source") else {
        return Ok(());
    };
    let specifier = node_text(source, ctx.src)
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();

    if specifier.starts_with('.') {
        ctx.structure.imports.internal.push(specifier.clone());
    } else {
        ctx.structure.imports.external.push(specifier.clone());
    }

    if is_type_only(node) {
        ctx.structure.imports.type_only.push(specifier);
    }

    // forwardRef/memo in the import clause set the composition flags no
    // matter where (or whether) they are later called.
    let mut cursor = node.walk();
    if let Some(clause) = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "import_clause")
    {
        let src = ctx.src;
        let composition = &mut ctx.structure.composition;
        walk::visit_all(clause, &mut |child| {
            let imported = match child.kind() {
                "import_specifier" => child
                    .child_by_field_name("name")
                    .map(|n| node_text(n, src)),
                // default import: `import memo from '...'`
                "identifier" if child.parent() == Some(clause) => Some(node_text(child, src)),
                _ => None,
            };
            match imported {
                Some("forwardRef") => composition.is_ref_forwarding = true,
                Some("memo") => composition.is_memoized = true,
                _ => {}
            }
        });
    }

    Ok(())
}

/// `import type { ... } from '...'` carries an anonymous `type` token as a
/// direct child of the statement.
fn is_type_only(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == "type");
    found
}
