//! @acp:module "PRD"
//! @acp:summary "Product Requirements Document assembly and RICE prioritization"
//! @acp:domain prd
//! @acp:layer feature

pub mod format;
pub mod generator;
pub mod record;
pub mod rice;
pub mod sections;
pub mod types;

pub use format::{format_list, format_target_users};
pub use generator::{generate_prd, PrdGenerator};
pub use record::{InputFormat, InputRecord};
pub use rice::{calculate_rice_score, parse_impact, ImpactLevel, RiceInputs};
pub use sections::{Section, SectionContext, SectionId, SECTIONS};
pub use types::{AiMlRequirements, DocumentMeta, Metric, FRAMEWORKS, PRD_VERSION};
