//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod generate;
pub mod init;
pub mod rice;
pub mod sections;

pub use generate::{execute_generate, load_record, GenerateOptions};
pub use init::{execute_init, starter_record, InitOptions, StarterAnswers};
pub use rice::{execute_rice, RiceOptions, RiceReport};
pub use sections::{execute_sections, list_sections, SectionListing, SectionsOptions};
