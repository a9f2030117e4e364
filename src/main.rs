use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use copt_cli::{
    DocumentOverrides, analyze_documents, below_threshold, display_banner, load_documents, render,
};
use copt_core::{Lexicon, OptimizerConfig, OutputFormat, parse_threshold};
use copt_scorer::ContentOptimizer;

/// Exit status when `--fail-below` is not met
const BELOW_THRESHOLD_EXIT: i32 = 2;

#[derive(Parser)]
#[command(name = "content-optimizer")]
#[command(about = "Readability, SEO and quality scoring for markdown content", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON lexicon file for sentiment and tone word lists
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score markdown documents (stdin when no files are given)
    Analyze {
        /// Files to analyze; `-` reads stdin
        files: Vec<PathBuf>,

        /// Page title used for the meta title check
        #[arg(long)]
        title: Option<String>,

        /// Meta description used for the description check
        #[arg(long)]
        meta_description: Option<String>,

        /// Target keyword (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Treat each input as a JSON document body
        #[arg(long)]
        json_input: bool,

        /// Output format: text, json or pretty
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Overall score below which a rewrite is recommended
        #[arg(long, value_parser = parse_threshold)]
        rewrite_threshold: Option<u8>,

        /// Exit with status 2 if any document scores below this
        #[arg(long, value_parser = parse_threshold)]
        fail_below: Option<u8>,

        /// Print a rewrite brief for documents that need one
        #[arg(long)]
        brief: bool,
    },
    /// Print the active lexicon as JSON
    Lexicon,
}

fn parse_format(raw: &str) -> copt_core::Result<OutputFormat> {
    raw.parse()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = OptimizerConfig::from_env()?;
    let lexicon = match &cli.lexicon {
        Some(path) => Lexicon::from_file(path)?,
        None => config.load_lexicon(),
    };
    let optimizer = ContentOptimizer::with_lexicon(lexicon);

    match cli.command {
        Commands::Lexicon => {
            println!("{}", serde_json::to_string_pretty(optimizer.lexicon())?);
        }
        Commands::Analyze {
            files,
            title,
            meta_description,
            keywords,
            json_input,
            format,
            rewrite_threshold,
            fail_below,
            brief,
        } => {
            let format = format.unwrap_or(config.format);
            let rewrite_threshold = rewrite_threshold.unwrap_or(config.rewrite_threshold);
            let overrides = DocumentOverrides {
                title,
                meta_description,
                keywords,
            };

            let documents = load_documents(&files, json_input, &overrides)?;
            let results = analyze_documents(&optimizer, documents);

            if format == OutputFormat::Text && std::io::stdout().is_terminal() {
                display_banner();
            }
            println!("{}", render(format, &results, rewrite_threshold)?);

            if brief {
                for (loaded, analysis) in &results {
                    if analysis.needs_rewrite(rewrite_threshold) {
                        eprintln!("{} {}", "Rewrite brief for".cyan(), loaded.source.bold());
                        eprintln!("{}", analysis.rewrite_brief());
                    }
                }
            }

            if let Some(threshold) = fail_below {
                let failing = below_threshold(&results, threshold);
                if !failing.is_empty() {
                    eprintln!(
                        "{} {} below {}: {}",
                        "✗".red(),
                        failing.len(),
                        threshold,
                        failing.join(", ")
                    );
                    std::process::exit(BELOW_THRESHOLD_EXIT);
                }
            }
        }
    }

    Ok(())
}
