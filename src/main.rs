#![forbid(unsafe_code)]
//! PRD Generator Command Line Interface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prdgen::commands::{
    execute_generate, execute_init, execute_rice, execute_sections, GenerateOptions, InitOptions,
    RiceOptions, SectionsOptions,
};
use prdgen::{Config, InputFormat};

#[derive(Parser)]
#[command(name = "prd")]
#[command(about = "Generate Product Requirements Documents with RICE prioritization")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".prd.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a config file and a starter input record
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (use defaults)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Generate a PRD from an input record
    Generate {
        /// Input record (JSON or YAML); reads from stdin if not provided
        input: Option<PathBuf>,

        /// Output file path (default: output.path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Input format (json, yaml); detected from the extension by default
        #[arg(long)]
        format: Option<InputFormat>,

        /// Document date as YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Reject impact estimates off the RICE scale
        #[arg(long)]
        strict: bool,
    },

    /// Compute a RICE prioritization score
    Rice {
        /// Users affected per quarter
        #[arg(long)]
        reach: f64,

        /// Impact level (minimal, low, medium, high, massive) or multiplier
        #[arg(long)]
        impact: String,

        /// Confidence in the estimates (0.0-1.0)
        #[arg(long)]
        confidence: f64,

        /// Effort in person-months
        #[arg(long)]
        effort: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Reject impact values off the RICE scale
        #[arg(long)]
        strict: bool,
    },

    /// List document sections in order
    Sections {
        /// Input record to check section inclusion against
        input: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "prdgen=debug" } else { "prdgen=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        tracing::debug!("No config at {}, using defaults", cli.config.display());
        Config::default()
    };

    match cli.command {
        Commands::Init { force, yes } => {
            let options = InitOptions {
                force,
                yes,
                ..InitOptions::default()
            };
            execute_init(options)?;
        }

        Commands::Generate { input, output, stdout, format, date, strict } => {
            let options = GenerateOptions {
                input,
                output,
                stdout,
                format,
                date,
                strict,
            };
            execute_generate(options, &config)?;
        }

        Commands::Rice { reach, impact, confidence, effort, json, strict } => {
            let options = RiceOptions {
                reach,
                impact,
                confidence,
                effort,
                json,
                strict,
            };
            execute_rice(options, &config)?;
        }

        Commands::Sections { input, json } => {
            let options = SectionsOptions { input, json };
            execute_sections(options)?;
        }
    }

    Ok(())
}
