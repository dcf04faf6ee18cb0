//! @acp:module "Rice Command"
//! @acp:summary "Compute a standalone RICE prioritization score"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::prd::format::{format_count, format_percent};
use crate::prd::{parse_impact, ImpactLevel, RiceInputs};

/// Options for the rice command
#[derive(Debug, Clone)]
pub struct RiceOptions {
    pub reach: f64,
    /// Level name (`high`) or multiplier (`2`)
    pub impact: String,
    pub confidence: f64,
    pub effort: f64,
    /// Output as JSON
    pub json: bool,
    /// Reject impact values off the conventional scale
    pub strict: bool,
}

/// Score with the inputs that produced it
#[derive(Debug, Clone, Serialize)]
pub struct RiceReport {
    #[serde(flatten)]
    pub inputs: RiceInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_level: Option<ImpactLevel>,
    pub score: f64,
}

impl RiceReport {
    pub fn new(inputs: RiceInputs) -> Self {
        Self {
            impact_level: ImpactLevel::from_multiplier(inputs.impact),
            score: inputs.score(),
            inputs,
        }
    }
}

/// Execute the rice command
pub fn execute_rice(options: RiceOptions, config: &Config) -> Result<()> {
    let impact = parse_impact(&options.impact)?;
    let inputs = RiceInputs::new(options.reach, impact, options.confidence, options.effort);

    if options.strict || config.rice.strict_impact {
        inputs.check_impact()?;
    }

    let report = RiceReport::new(inputs);
    if report.impact_level.is_none() {
        tracing::warn!("Impact {} is off the conventional RICE scale", impact);
    }
    if options.effort == 0.0 {
        tracing::warn!("Effort is zero; score reported as 0");
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} RICE score: {}",
        style("✓").green(),
        style(format!("{:.1}", report.score)).bold()
    );
    println!("  Reach:      {}", format_count(inputs.reach));
    match report.impact_level {
        Some(level) => println!("  Impact:     {} ({})", inputs.impact, level.name()),
        None => println!("  Impact:     {}", inputs.impact),
    }
    println!("  Confidence: {}", format_percent(inputs.confidence, 0));
    println!("  Effort:     {} person-months", inputs.effort);

    Ok(())
}
