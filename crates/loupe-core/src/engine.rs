use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analyzer::StructureAnalyzer;
use crate::config::AnalysisConfig;
use crate::loader::{self, LoadOutcome};
use crate::types::{AnalysisResult, BatchResult, ComplexityMetrics, Fault, FaultKind};

/// The analysis engine: loader, parser, extractors, and scorer behind one
/// value-returning surface.
///
/// Config is supplied once at construction and read-only afterwards, so the
/// engine can be shared freely across threads.
pub struct Engine {
    analyzer: Box<dyn StructureAnalyzer>,
    config: AnalysisConfig,
}

impl Engine {
    pub fn new(analyzer: Box<dyn StructureAnalyzer>, config: AnalysisConfig) -> Self {
        Self { analyzer, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn file_extensions(&self) -> &[&str] {
        self.analyzer.file_extensions()
    }

    /// Analyze one source file. Always returns a well-formed result; faults
    /// surface as entries in `errors`/`warnings`, never as panics.
    pub fn analyze(&self, path: &Path, hint: Option<&serde_json::Value>) -> AnalysisResult {
        let span = tracing::debug_span!("analyze", path = %path.display());
        let _guard = span.enter();
        if let Some(hint) = hint {
            tracing::debug!(%hint, "discovery hint attached");
        }

        let content = match loader::read_source(path, self.config.max_file_size_bytes) {
            LoadOutcome::Loaded(content) => content,
            LoadOutcome::TooLarge { size, limit } => {
                return AnalysisResult::failed(Fault::new(
                    FaultKind::FileTooLarge,
                    format!("file size {size} bytes exceeds limit {limit} bytes"),
                ));
            }
            LoadOutcome::Unreadable(message) => {
                return AnalysisResult::failed(Fault::new(FaultKind::FileUnreadable, message));
            }
        };

        let parsed = match self.analyzer.parse(path, &content) {
            Ok(parsed) => parsed,
            Err(fault) => {
                tracing::debug!(fault = %fault, "parse failed");
                return AnalysisResult::failed(fault);
            }
        };

        let (structure, soft_faults) = self.analyzer.extract(&parsed, &self.config);
        for fault in &soft_faults {
            tracing::warn!(fault = %fault, "extractor fault");
        }

        let metrics = if self.config.compute_complexity {
            self.analyzer.score(&parsed)
        } else {
            ComplexityMetrics::default()
        };

        AnalysisResult {
            success: true,
            structure: Some(structure),
            metrics,
            errors: Vec::new(),
            warnings: soft_faults,
        }
    }

    /// Analyze a list of files, folding results into a map keyed by path.
    ///
    /// Files are data-independent, so they are processed in parallel; one
    /// file's failure never aborts the batch.
    pub fn analyze_batch(
        &self,
        files: &[(PathBuf, Option<serde_json::Value>)],
    ) -> BatchResult {
        let entries: Vec<(String, AnalysisResult)> = files
            .par_iter()
            .map(|(path, hint)| {
                let result = self.analyze(path, hint.as_ref());
                (path.to_string_lossy().to_string(), result)
            })
            .collect();

        let total = entries.len();
        let results: BTreeMap<String, AnalysisResult> = entries.into_iter().collect();
        let succeeded = results.values().filter(|r| r.success).count();

        tracing::info!(succeeded, total, "batch analysis finished");
        BatchResult {
            results,
            succeeded,
            total,
        }
    }
}
