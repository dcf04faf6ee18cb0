//! @acp:module "PRD Generator"
//! @acp:summary "Assembles the section table into one Markdown document"
//! @acp:domain prd
//! @acp:layer api

use chrono::{Local, NaiveDate};

use super::record::InputRecord;
use super::sections::{SectionContext, SectionId, SECTIONS};
use super::types::{DocumentMeta, FRAMEWORKS};

/// Separator placed between consecutive section blocks
pub const SECTION_SEPARATOR: &str = "\n\n";

/// @acp:summary "Generates Product Requirements Documents from input records"
///
/// Generation never fails: absent fields fall back to placeholder text.
///
/// ```
/// use prdgen::{InputRecord, PrdGenerator};
///
/// let record = InputRecord::new()
///     .with("feature_name", "Smart Search")
///     .with("problem_statement", "find content faster");
/// let prd = PrdGenerator::new().generate(&record);
/// assert!(prd.starts_with("# PRD: Smart Search"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrdGenerator {
    meta: DocumentMeta,
}

impl PrdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom header/revision metadata
    pub fn with_meta(meta: DocumentMeta) -> Self {
        Self { meta }
    }

    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    pub fn frameworks(&self) -> &'static [&'static str] {
        &FRAMEWORKS
    }

    /// Generate a document dated today (local time)
    pub fn generate(&self, record: &InputRecord) -> String {
        self.generate_on(record, Local::now().date_naive())
    }

    /// Generate a document with an explicit date. Output depends only on the
    /// record, the metadata and `date`.
    pub fn generate_on(&self, record: &InputRecord, date: NaiveDate) -> String {
        let ctx = SectionContext {
            record,
            meta: &self.meta,
            date,
        };

        let blocks: Vec<String> = SECTIONS
            .iter()
            .filter(|section| section.includes(record))
            .map(|section| section.render(&ctx))
            .collect();

        tracing::debug!(
            "Assembled PRD: {} sections, {} fields in record",
            blocks.len(),
            record.len()
        );

        blocks.join(SECTION_SEPARATOR)
    }

    /// Sections that `generate` would emit for this record, in order
    pub fn included_sections(&self, record: &InputRecord) -> Vec<SectionId> {
        SECTIONS
            .iter()
            .filter(|section| section.includes(record))
            .map(|section| section.id)
            .collect()
    }
}

/// Generate a PRD with default metadata
pub fn generate_prd(record: &InputRecord) -> String {
    PrdGenerator::new().generate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_included_sections_without_ai() {
        let ids = PrdGenerator::new().included_sections(&InputRecord::new());
        assert_eq!(ids.len(), 13);
        assert!(!ids.contains(&SectionId::AiMlSpecifications));
    }

    #[test]
    fn test_included_sections_with_ai() {
        let record = InputRecord::new().with("ai_ml_requirements", json!({"model_type": "ranker"}));
        let ids = PrdGenerator::new().included_sections(&record);
        assert_eq!(ids.len(), 14);
        let pos = ids
            .iter()
            .position(|id| *id == SectionId::AiMlSpecifications)
            .unwrap();
        assert_eq!(ids[pos - 1], SectionId::TechnicalRequirements);
        assert_eq!(ids[pos + 1], SectionId::UserExperience);
    }

    #[test]
    fn test_empty_ai_mapping_is_excluded() {
        let record = InputRecord::new().with("ai_ml_requirements", json!({}));
        let prd = PrdGenerator::new().generate_on(&record, fixed_date());
        assert!(!prd.contains("AI/ML Specifications"));
    }

    #[test]
    fn test_sections_joined_by_blank_line() {
        let prd = PrdGenerator::new().generate_on(&InputRecord::new(), fixed_date());
        assert!(prd.contains("---\n\n\n## Executive Summary"));
        assert!(prd.contains("\n\n\n## Appendix"));
        assert!(prd.ends_with("user feedback.*\n"));
    }

    #[test]
    fn test_custom_meta() {
        let meta = DocumentMeta {
            owner: "Dana Reyes".to_string(),
            status: "In Review".to_string(),
            ..DocumentMeta::default()
        };
        let prd = PrdGenerator::with_meta(meta).generate_on(&InputRecord::new(), fixed_date());
        assert!(prd.contains("**Owner**: Dana Reyes  \n"));
        assert!(prd.contains("**Status**: In Review  \n"));
    }

    #[test]
    fn test_frameworks() {
        assert_eq!(
            PrdGenerator::new().frameworks(),
            &["JTBD", "SMART", "RICE", "MoSCoW", "RACI"]
        );
    }
}
