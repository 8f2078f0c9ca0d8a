use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration from `.loupe.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Discovery settings consumed by the CLI; the engine itself never walks
/// directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/*.d.ts".to_string(),
        "**/*.test.*".to_string(),
        "**/*.spec.*".to_string(),
    ]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

/// Per-engine analysis options, read-only for the lifetime of all calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub include_private_methods: bool,
    /// Reserved for doc-comment extraction; currently a no-op.
    #[serde(default = "default_true")]
    pub extract_descriptions: bool,
    #[serde(default = "default_true")]
    pub compute_complexity: bool,
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

fn default_true() -> bool {
    true
}

fn default_max_file_size() -> u64 {
    1_048_576
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_private_methods: false,
            extract_descriptions: true,
            compute_complexity: true,
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

impl Config {
    /// Load configuration from a `.loupe.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "failed to parse '{}'. Run `loupe init` to create a valid config file",
                path.display()
            )
        })?;
        Ok(config)
    }

    /// Load from `.loupe.toml` in the given directory or any ancestor, or return defaults.
    pub fn load_or_default(dir: &Path) -> Self {
        let start = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut current = start.as_path();
        loop {
            let config_path = current.join(".loupe.toml");
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %format!("{e:#}"),
                            "failed to load config, using defaults"
                        );
                        Self::default()
                    }
                };
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        Self::default()
    }

    /// Generate default TOML content for `loupe init`.
    pub fn default_toml() -> String {
        r#"# loupe - Component Structure Analysis Configuration
# See https://github.com/loupe-dev/loupe for documentation

[project]
# Glob patterns excluded from file discovery
exclude_patterns = ["**/node_modules/**", "**/dist/**", "**/*.d.ts", "**/*.test.*", "**/*.spec.*"]

[analysis]
# Record methods whose names start with an underscore
include_private_methods = false
# Reserved for doc-comment extraction
extract_descriptions = true
# Compute cyclomatic/cognitive/maintainability metrics per file
compute_complexity = true
# Files larger than this are rejected without being read
max_file_size_bytes = 1048576
"#
        .to_string()
    }
}
