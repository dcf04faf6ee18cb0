//! @acp:module "Generate Command"
//! @acp:summary "Render a PRD from an input record file or stdin"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;

use crate::config::Config;
use crate::prd::{InputFormat, InputRecord, PrdGenerator, RiceInputs};

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Input record file (reads from stdin if None)
    pub input: Option<PathBuf>,
    /// Output file, overriding the configured path
    pub output: Option<PathBuf>,
    /// Print the document instead of writing a file
    pub stdout: bool,
    /// Input format, detected from the extension if None
    pub format: Option<InputFormat>,
    /// Fixed document date (defaults to today)
    pub date: Option<NaiveDate>,
    /// Reject impact estimates off the RICE scale
    pub strict: bool,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let record = load_record(options.input.as_deref(), options.format)?;

    if (options.strict || config.rice.strict_impact) && record.contains("impact_estimate") {
        let level = RiceInputs::from_record(&record).check_impact()?;
        tracing::debug!("Impact estimate is on the RICE scale ({})", level.name());
    }

    let generator = PrdGenerator::with_meta(config.document.clone());
    let document = match options.date {
        Some(date) => generator.generate_on(&record, date),
        None => generator.generate(&record),
    };

    if options.stdout {
        print!("{}", document);
        return Ok(());
    }

    let output = options
        .output
        .unwrap_or_else(|| config.output_path().to_path_buf());
    write_document(&output, &document)?;

    println!(
        "{} PRD written to {}",
        style("✓").green(),
        output.display()
    );
    println!(
        "  Sections: {}",
        generator.included_sections(&record).len()
    );

    Ok(())
}

/// Read an input record from a file or stdin
pub fn load_record(input: Option<&Path>, format: Option<InputFormat>) -> Result<InputRecord> {
    match input {
        Some(path) => {
            let record = match format {
                Some(format) => {
                    let content = std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read input from {:?}", path))?;
                    InputRecord::parse(&content, format)
                }
                None => InputRecord::load(path),
            };
            record.with_context(|| format!("Failed to load input record from {:?}", path))
        }
        None => InputRecord::read(std::io::stdin().lock(), format.unwrap_or_default())
            .context("Failed to read input record from stdin"),
    }
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
    }
    std::fs::write(path, document).with_context(|| format!("Failed to write PRD to {:?}", path))
}
