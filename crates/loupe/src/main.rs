use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use loupe_core::config::Config;
use loupe_core::types::BatchResult;
use loupe_core::Engine;
use loupe_tsx::TsxAnalyzer;

mod report;

#[derive(Parser)]
#[command(name = "loupe")]
#[command(about = "Analyze the structure and complexity of typed UI components")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a component file or directory and print a structure report
    Analyze {
        /// Path to a component file or directory
        path: PathBuf,
        /// Config file path (defaults to .loupe.toml in the target's ancestors)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Emit the full result map as JSON
        #[arg(long)]
        json: bool,
        /// Single-line JSON output (implies --json)
        #[arg(long)]
        compact: bool,
    },
    /// Analyze and exit with code 0 (all files pass) or 1 (failures)
    Check {
        /// Path to a component file or directory
        path: PathBuf,
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a default .loupe.toml configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            path,
            config,
            json,
            compact,
        } => cmd_analyze(&path, config.as_deref(), json || compact, compact),
        Commands::Check { path, config } => cmd_check(&path, config.as_deref()),
        Commands::Init { force } => cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_analyze(path: &Path, config_path: Option<&Path>, json: bool, compact: bool) -> Result<()> {
    let config = load_config(path, config_path)?;
    let batch = run_batch(path, &config)?;
    if json {
        println!("{}", report::format_json(&batch, compact));
    } else {
        print!("{}", report::format_report(&batch));
    }
    Ok(())
}

fn cmd_check(path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(path, config_path)?;
    let batch = run_batch(path, &config)?;
    let (report, passed) = report::format_check(&batch);
    print!("{report}");
    if !passed {
        process::exit(1);
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let target = PathBuf::from(".loupe.toml");
    if target.exists() && !force {
        anyhow::bail!(".loupe.toml already exists. Use --force to overwrite.");
    }
    std::fs::write(&target, Config::default_toml())?;
    println!("Created .loupe.toml with default configuration.");
    Ok(())
}

fn load_config(target: &Path, config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => Config::load(p),
        None => {
            let base = if target.is_file() {
                target.parent().unwrap_or(target)
            } else {
                target
            };
            Ok(Config::load_or_default(base))
        }
    }
}

fn run_batch(target: &Path, config: &Config) -> Result<BatchResult> {
    let engine = Engine::new(Box::new(TsxAnalyzer::new()), config.analysis.clone());
    let files = discover_files(
        target,
        engine.file_extensions(),
        &config.project.exclude_patterns,
    )?;
    if files.is_empty() {
        anyhow::bail!("no component files found under '{}'", target.display());
    }

    let list: Vec<(PathBuf, Option<serde_json::Value>)> =
        files.into_iter().map(|path| (path, None)).collect();
    tracing::debug!(files = list.len(), target = %target.display(), "starting batch");
    Ok(engine.analyze_batch(&list))
}

/// Discover candidate files under `root`, filtered by extension and the
/// configured exclude patterns. A file target is passed through as-is.
fn discover_files(
    root: &Path,
    extensions: &[&str],
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let excludes = build_globset(exclude_patterns)?;
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let path = e.path();
            let matches_ext = path
                .extension()
                .and_then(|x| x.to_str())
                .is_some_and(|ext| extensions.contains(&ext));
            matches_ext && !excludes.is_match(path.strip_prefix(root).unwrap_or(path))
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder.build().context("failed to compile exclude patterns")
}
