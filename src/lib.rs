#![forbid(unsafe_code)]

//! @acp:module "PRD Generator Library"
//! @acp:summary "Product Requirements Document assembly with RICE prioritization"
//! @acp:domain prd
//! @acp:layer api
//! @acp:stability stable
//!
//! # prdgen
//!
//! Builds a Markdown Product Requirements Document from a mapping of input
//! fields. Sections follow JTBD, SMART, RICE, MoSCoW and RACI framing.
//!
//! ## Features
//!
//! - **Total**: missing fields fall back to placeholder text, generation never fails
//! - **RICE Scoring**: reach x impact x confidence / effort, zero effort scores 0
//! - **Conditional AI/ML section**: emitted only when `ai_ml_requirements` is set
//! - **JSON or YAML input**: records load from files or stdin
//!
//! ## Example
//!
//! ```rust
//! use prdgen::{generate_prd, InputRecord};
//! use serde_json::json;
//!
//! let record = InputRecord::new()
//!     .with("feature_name", "Smart Search")
//!     .with("target_users", json!(["Admins", "End users"]))
//!     .with("ai_ml_requirements", json!({"model_type": "ranker"}));
//!
//! let markdown = generate_prd(&record);
//! assert!(markdown.contains("## AI/ML Specifications"));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod prd;

// Re-exports
pub use config::Config;
pub use error::{PrdError, Result};
pub use prd::{
    calculate_rice_score, format_list, format_target_users, generate_prd, DocumentMeta,
    ImpactLevel, InputFormat, InputRecord, PrdGenerator, RiceInputs, SectionId,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
