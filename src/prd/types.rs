//! @acp:module "PRD Types"
//! @acp:summary "Metric rows, AI/ML requirements and document metadata"
//! @acp:domain prd
//! @acp:layer model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::format::display_value;

/// Version stamped into the header and revision history
pub const PRD_VERSION: &str = "1.0.0";

/// Frameworks the generated document is structured around
pub const FRAMEWORKS: [&str; 5] = ["JTBD", "SMART", "RICE", "MoSCoW", "RACI"];

const TBD: &str = "TBD";

/// One row of the success metrics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub name: String,
    pub baseline: String,
    pub target: String,
    pub timeline: String,
    pub measurement: String,
}

impl Metric {
    /// Build from a record value. Each key is defaulted on its own.
    ///
    /// A bare scalar is taken as the metric name.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                name: field(map, "name", "Metric"),
                baseline: field(map, "baseline", TBD),
                target: field(map, "target", TBD),
                timeline: field(map, "timeline", TBD),
                measurement: field(map, "measurement", TBD),
            },
            other => {
                let name = display_value(other);
                Self {
                    name: if name.is_empty() { "Metric".to_string() } else { name },
                    baseline: TBD.to_string(),
                    target: TBD.to_string(),
                    timeline: TBD.to_string(),
                    measurement: TBD.to_string(),
                }
            }
        }
    }

    /// Placeholder metric used when the record names none
    pub fn user_engagement() -> Self {
        Self {
            name: "User Engagement".to_string(),
            baseline: "Current: X%".to_string(),
            target: "Target: Y%".to_string(),
            timeline: "3 months post-launch".to_string(),
            measurement: "Weekly active usage rate".to_string(),
        }
    }

    pub fn table_row(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |",
            self.name, self.baseline, self.target, self.timeline, self.measurement
        )
    }
}

/// Model, data and performance targets for the AI/ML section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiMlRequirements {
    pub model_type: String,
    pub accuracy_target: String,
    pub latency_target: String,
    pub throughput_target: String,
    pub data_requirements: String,
}

impl AiMlRequirements {
    /// Non-mapping values (e.g. `true`) yield all defaults
    pub fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let map = value.as_object().unwrap_or(&empty);
        Self {
            model_type: field(map, "model_type", TBD),
            accuracy_target: field(map, "accuracy_target", "> 90%"),
            latency_target: field(map, "latency_target", "< 100ms"),
            throughput_target: field(map, "throughput_target", "X predictions/second"),
            data_requirements: field(map, "data_requirements", TBD),
        }
    }
}

/// @acp:summary "Document metadata shown in the header and revision history"
///
/// Defaults reproduce the placeholder header of a fresh draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Document version
    #[serde(default = "default_doc_version")]
    pub version: String,

    /// Review status
    #[serde(default = "default_status")]
    pub status: String,

    /// Owning product manager
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Stakeholder list as shown in the header
    #[serde(default = "default_stakeholders")]
    pub stakeholders: String,

    /// Author column of the revision history
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            version: default_doc_version(),
            status: default_status(),
            owner: default_owner(),
            stakeholders: default_stakeholders(),
            author: default_author(),
        }
    }
}

fn default_doc_version() -> String {
    PRD_VERSION.to_string()
}

fn default_status() -> String {
    "Draft".to_string()
}

fn default_owner() -> String {
    "[Product Manager Name]".to_string()
}

fn default_stakeholders() -> String {
    "[Engineering Lead, Design Lead, Data Science Lead]".to_string()
}

fn default_author() -> String {
    "PM".to_string()
}

fn field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .filter(|v| !v.is_null())
        .map(display_value)
        .unwrap_or_else(|| default.to_string())
}
