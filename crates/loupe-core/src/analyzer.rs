use std::path::{Path, PathBuf};

use tree_sitter::Tree;

use crate::config::AnalysisConfig;
use crate::types::{ComplexityMetrics, ComponentStructure, Fault};

/// Dialect capabilities derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Source may contain embedded markup nodes (JSX).
    pub markup: bool,
    /// Source may carry static type annotations.
    pub typed: bool,
}

impl Dialect {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx") => Self {
                markup: true,
                typed: true,
            },
            Some("jsx") => Self {
                markup: true,
                typed: false,
            },
            Some("ts") => Self {
                markup: false,
                typed: true,
            },
            _ => Self {
                markup: false,
                typed: false,
            },
        }
    }
}

/// A parsed source file with its tree-sitter AST and original content.
///
/// Owned exclusively by the analysis call that produced it; the tree is never
/// mutated after creation.
pub struct ParsedSource {
    pub path: PathBuf,
    pub tree: Tree,
    pub content: String,
    pub dialect: Dialect,
}

/// Trait that a language analyzer must implement.
///
/// All three operations are value-returning: a fault comes back as data, not
/// as a panic or an open-ended error type.
pub trait StructureAnalyzer: Send + Sync {
    /// File extensions this analyzer handles (e.g., &["ts", "tsx"])
    fn file_extensions(&self) -> &[&str];

    /// Parse raw text into a ParsedSource, or report a parse failure.
    fn parse(&self, path: &Path, content: &str) -> Result<ParsedSource, Fault>;

    /// Extract the structural model, accumulating soft faults.
    fn extract(&self, parsed: &ParsedSource, config: &AnalysisConfig)
        -> (ComponentStructure, Vec<Fault>);

    /// Compute complexity metrics over the same tree.
    fn score(&self, parsed: &ParsedSource) -> ComplexityMetrics;
}
