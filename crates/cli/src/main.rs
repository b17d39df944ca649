use anyhow::{Context, Result};
use clap::Parser;
use semscope_concepts::{analyze_project, AnalyzerOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "semscope")]
#[command(about = "Extract weighted domain concepts from a source tree", long_about = None)]
#[command(version)]
struct Cli {
    /// Project directory to analyze
    project_dir: PathBuf,

    /// Glob-style ignore pattern, repeatable (merged with built-in defaults)
    #[arg(short, long = "ignore")]
    ignore: Vec<String>,

    /// Minimum accumulated score for a concept to be retained
    #[arg(long, default_value_t = 2)]
    min_term_frequency: u32,

    /// Maximum number of retained concepts
    #[arg(long, default_value_t = 100)]
    max_terms: usize,

    /// Maximum number of files to analyze
    #[arg(long, default_value_t = 500)]
    max_files: usize,

    /// Exclude comment text from scoring
    #[arg(long)]
    no_comments: bool,

    /// Exclude identifier words from scoring
    #[arg(long)]
    no_identifiers: bool,

    /// Exclude documentation files (markdown, README)
    #[arg(long)]
    no_docs: bool,

    /// Write the JSON result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let options = AnalyzerOptions {
        include_comments: !cli.no_comments,
        include_identifiers: !cli.no_identifiers,
        include_docs: !cli.no_docs,
        min_term_frequency: cli.min_term_frequency,
        max_terms: cli.max_terms,
        max_files: cli.max_files,
        ignore_paths: cli.ignore,
    };

    let result = analyze_project(&cli.project_dir, &options)
        .await
        .with_context(|| format!("Failed to analyze {}", cli.project_dir.display()))?;

    let json = serde_json::to_string_pretty(&result)?;
    match cli.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Result written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
