//! @acp:module "RICE Scoring"
//! @acp:summary "Reach x Impact x Confidence / Effort prioritization score"
//! @acp:domain prd
//! @acp:layer logic

use std::str::FromStr;

use serde::Serialize;

use super::record::InputRecord;
use crate::error::{PrdError, Result};

/// Calculate the RICE prioritization score
///
/// * `reach` - users or customers affected per period
/// * `impact` - conventionally 0.25, 0.5, 1, 2 or 3 (see [`ImpactLevel`])
/// * `confidence` - confidence in the estimates, 0.0 to 1.0
/// * `effort` - person-months of work
///
/// Zero effort scores 0 rather than dividing by zero. Inputs are not
/// range-checked.
pub fn calculate_rice_score(reach: f64, impact: f64, confidence: f64, effort: f64) -> f64 {
    if effort == 0.0 {
        return 0.0;
    }
    (reach * impact * confidence) / effort
}

/// @acp:summary "The four RICE inputs, read from a record with defaults"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiceInputs {
    pub reach: f64,
    pub impact: f64,
    pub confidence: f64,
    pub effort: f64,
}

impl Default for RiceInputs {
    fn default() -> Self {
        Self {
            reach: 10_000.0,
            impact: 0.20,
            confidence: 0.80,
            effort: 5.0,
        }
    }
}

impl RiceInputs {
    pub fn new(reach: f64, impact: f64, confidence: f64, effort: f64) -> Self {
        Self {
            reach,
            impact,
            confidence,
            effort,
        }
    }

    /// Read `reach_estimate`, `impact_estimate`, `confidence_level` and
    /// `effort_estimate`, falling back to the defaults per field
    pub fn from_record(record: &InputRecord) -> Self {
        let defaults = Self::default();
        Self {
            reach: record.number_or("reach_estimate", defaults.reach),
            impact: record.number_or("impact_estimate", defaults.impact),
            confidence: record.number_or("confidence_level", defaults.confidence),
            effort: record.number_or("effort_estimate", defaults.effort),
        }
    }

    pub fn score(&self) -> f64 {
        calculate_rice_score(self.reach, self.impact, self.confidence, self.effort)
    }

    /// Strict check that impact sits on the conventional scale
    pub fn check_impact(&self) -> Result<ImpactLevel> {
        ImpactLevel::from_multiplier(self.impact).ok_or(PrdError::InvalidImpact(self.impact))
    }
}

/// Conventional RICE impact scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Minimal,
    Low,
    Medium,
    High,
    Massive,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 5] = [
        ImpactLevel::Minimal,
        ImpactLevel::Low,
        ImpactLevel::Medium,
        ImpactLevel::High,
        ImpactLevel::Massive,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            ImpactLevel::Minimal => 0.25,
            ImpactLevel::Low => 0.5,
            ImpactLevel::Medium => 1.0,
            ImpactLevel::High => 2.0,
            ImpactLevel::Massive => 3.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImpactLevel::Minimal => "minimal",
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
            ImpactLevel::Massive => "massive",
        }
    }

    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - value).abs() < 1e-9)
    }
}

impl FromStr for ImpactLevel {
    type Err = PrdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Some(level) = Self::ALL.into_iter().find(|l| l.name() == normalized) {
            return Ok(level);
        }
        normalized
            .parse::<f64>()
            .ok()
            .and_then(Self::from_multiplier)
            .ok_or_else(|| PrdError::UnknownImpactLevel(s.to_string()))
    }
}

/// Parse an impact argument: a level name (`high`) or any number (`0.2`)
pub fn parse_impact(s: &str) -> Result<f64> {
    if let Ok(level) = s.parse::<ImpactLevel>() {
        return Ok(level.multiplier());
    }
    s.trim()
        .parse::<f64>()
        .map_err(|_| PrdError::UnknownImpactLevel(s.to_string()))
}
