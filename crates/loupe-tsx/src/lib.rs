use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use loupe_core::analyzer::{Dialect, ParsedSource, StructureAnalyzer};
use loupe_core::config::AnalysisConfig;
use loupe_core::types::{ComplexityMetrics, ComponentStructure, Fault};

mod complexity;
mod extract;
mod kinds;
mod walk;

pub use kinds::NodeKind;

/// TypeScript/TSX structural analyzer using tree-sitter.
///
/// Markup dialects (`tsx`, `jsx`) parse with the TSX grammar; everything else
/// uses the plain TypeScript grammar, which also accepts untyped JavaScript.
pub struct TsxAnalyzer {
    ts_language: Language,
    tsx_language: Language,
}

impl TsxAnalyzer {
    pub fn new() -> Self {
        Self {
            ts_language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx_language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn language_for(&self, dialect: Dialect) -> &Language {
        if dialect.markup {
            &self.tsx_language
        } else {
            &self.ts_language
        }
    }
}

impl Default for TsxAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureAnalyzer for TsxAnalyzer {
    fn file_extensions(&self) -> &[&str] {
        &["ts", "tsx", "js", "jsx"]
    }

    fn parse(&self, path: &Path, content: &str) -> Result<ParsedSource, Fault> {
        let dialect = Dialect::from_path(path);

        let mut parser = Parser::new();
        parser
            .set_language(self.language_for(dialect))
            .map_err(|e| Fault::parse_failure(format!("failed to set language: {e}")))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| Fault::parse_failure("parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let message = first_error(root)
                .map(|(line, column)| format!("syntax error at {line}:{column}"))
                .unwrap_or_else(|| "syntax error".to_string());
            return Err(Fault::parse_failure(message));
        }

        Ok(ParsedSource {
            path: path.to_path_buf(),
            tree,
            content: content.to_string(),
            dialect,
        })
    }

    fn extract(
        &self,
        parsed: &ParsedSource,
        config: &AnalysisConfig,
    ) -> (ComponentStructure, Vec<Fault>) {
        extract::extract_structure(parsed, config)
    }

    fn score(&self, parsed: &ParsedSource) -> ComplexityMetrics {
        complexity::score(parsed)
    }
}

/// Line:column (1-based) of the first ERROR or MISSING node.
fn first_error(root: Node<'_>) -> Option<(usize, usize)> {
    let mut found = None;
    walk::visit_all(root, &mut |node| {
        if found.is_none() && (node.is_error() || node.is_missing()) {
            let point = node.start_position();
            found = Some((point.row + 1, point.column + 1));
        }
    });
    found
}
