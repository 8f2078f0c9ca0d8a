mod bindings;
mod classes;
mod composition;
mod exports;
mod functions;
mod imports;
mod interfaces;
mod types;

use loupe_core::analyzer::ParsedSource;
use loupe_core::config::AnalysisConfig;
use loupe_core::types::{ComponentStructure, Fault};

use crate::kinds::NodeKind;
use crate::walk;

/// Shared accumulator threaded through every extractor call.
pub(crate) struct ExtractCtx<'a> {
    pub src: &'a str,
    pub config: &'a AnalysisConfig,
    pub structure: ComponentStructure,
}

/// A soft fault raised by a single extractor; the walk continues past it.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ExtractError {
    #[error("missing `{0}` field")]
    MissingField(&'static str),
}

pub(crate) type ExtractResult = Result<(), ExtractError>;

/// Run every structural extractor over one parsed source file.
///
/// The dispatch is an exhaustive match over the closed [`NodeKind`] set; a
/// faulting extractor is recorded and skipped, never allowed to abort the
/// remaining tree.
pub fn extract_structure(
    parsed: &ParsedSource,
    config: &AnalysisConfig,
) -> (ComponentStructure, Vec<Fault>) {
    let mut ctx = ExtractCtx {
        src: &parsed.content,
        config,
        structure: ComponentStructure::default(),
    };
    let mut faults = Vec::new();

    walk::visit_all(parsed.tree.root_node(), &mut |node| {
        let outcome = match NodeKind::classify(node.kind()) {
            NodeKind::Import => imports::collect(node, &mut ctx),
            NodeKind::Export => exports::collect(node, &mut ctx),
            NodeKind::FunctionDeclaration => functions::collect_declaration(node, &mut ctx),
            NodeKind::VariableDeclarator => functions::collect_declarator(node, &mut ctx),
            NodeKind::CallExpression => bindings::collect(node, &mut ctx),
            NodeKind::JsxElement | NodeKind::JsxSelfClosing => composition::collect(node, &mut ctx),
            NodeKind::InterfaceDeclaration | NodeKind::TypeAlias => {
                interfaces::collect(node, &mut ctx)
            }
            NodeKind::ClassDeclaration => classes::collect(node, &mut ctx),
            NodeKind::Other => Ok(()),
        };

        if let Err(err) = outcome {
            let point = node.start_position();
            tracing::warn!(
                kind = node.kind(),
                line = point.row + 1,
                error = %err,
                "extractor fault, continuing"
            );
            faults.push(Fault::extraction(format!(
                "{} at {}:{}: {err}",
                node.kind(),
                point.row + 1,
                point.column + 1
            )));
        }
    });

    (ctx.structure, faults)
}
