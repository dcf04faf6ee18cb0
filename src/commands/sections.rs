//! @acp:module "Sections Command"
//! @acp:summary "List document sections in order and which ones an input includes"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::generate::load_record;
use crate::prd::{InputRecord, SectionId, FRAMEWORKS, SECTIONS};

/// Options for the sections command
#[derive(Debug, Clone, Default)]
pub struct SectionsOptions {
    /// Input record to check inclusion against
    pub input: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionListing {
    pub id: SectionId,
    pub title: &'static str,
    pub conditional: bool,
    /// Only known when an input record was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
}

/// Describe the section table, optionally against a record
pub fn list_sections(record: Option<&InputRecord>) -> Vec<SectionListing> {
    SECTIONS
        .iter()
        .map(|section| SectionListing {
            id: section.id,
            title: section.id.title(),
            conditional: section.is_conditional(),
            included: record.map(|r| section.includes(r)),
        })
        .collect()
}

/// Execute the sections command
pub fn execute_sections(options: SectionsOptions) -> Result<()> {
    let record = match options.input {
        Some(ref path) => Some(load_record(Some(path.as_path()), None)?),
        None => None,
    };
    let listing = list_sections(record.as_ref());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Document sections ({}):\n", listing.len());
    for (i, entry) in listing.iter().enumerate() {
        let marker = match entry.included {
            Some(true) => style("✓").green(),
            Some(false) => style("✗").dim(),
            None => style("•").cyan(),
        };
        let note = if entry.conditional {
            " (only with ai_ml_requirements)"
        } else {
            ""
        };
        println!(
            "  {} {:>2}. {}{}",
            marker,
            i + 1,
            style(entry.title).bold(),
            style(note).dim()
        );
    }

    println!("\nFrameworks: {}", FRAMEWORKS.join(", "));

    Ok(())
}
