pub mod analyzer;
pub mod config;
pub mod engine;
pub mod loader;
pub mod types;

pub use analyzer::{Dialect, ParsedSource, StructureAnalyzer};
pub use config::{AnalysisConfig, Config};
pub use engine::Engine;
pub use types::*;
