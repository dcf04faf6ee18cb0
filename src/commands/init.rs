//! @acp:module "Init Command"
//! @acp:summary "Create a config file and a starter input record"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `prd init`. Prompts for the main fields unless `--yes` is given.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde_json::json;

use crate::config::{Config, CONFIG_FILE};
use crate::prd::InputRecord;

/// Starter input file name
pub const INPUT_FILE: &str = "prd.input.json";

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory to initialize
    pub root: PathBuf,
    /// Force overwrite existing files
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            force: false,
            yes: false,
        }
    }
}

/// Answers collected by the interactive setup
#[derive(Debug, Clone)]
pub struct StarterAnswers {
    pub feature_name: String,
    pub problem_statement: String,
    pub target_users: Vec<String>,
    /// Model type when the feature has an AI/ML component
    pub model_type: Option<String>,
}

impl Default for StarterAnswers {
    fn default() -> Self {
        Self {
            feature_name: "New Feature".to_string(),
            problem_statement: "helps users accomplish their goals faster".to_string(),
            target_users: vec!["End users".to_string()],
            model_type: None,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = options.root.join(CONFIG_FILE);
    let input_path = options.root.join(INPUT_FILE);

    for path in [&config_path, &input_path] {
        if path.exists() && !options.force {
            bail!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            );
        }
    }

    let answers = if options.yes {
        StarterAnswers::default()
    } else {
        run_interactive_init()?
    };

    Config::default().save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    let record = starter_record(&answers);
    std::fs::write(&input_path, serde_json::to_string_pretty(&record)?)?;
    println!("{} Created {}", style("✓").green(), input_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Fill in the estimates in {}", INPUT_FILE);
    println!(
        "  2. Run {} to render the document",
        style(format!("prd generate {}", INPUT_FILE)).cyan()
    );

    Ok(())
}

fn run_interactive_init() -> Result<StarterAnswers> {
    println!("{} PRD Setup\n", style("→").cyan());
    let theme = ColorfulTheme::default();
    let defaults = StarterAnswers::default();

    let feature_name: String = Input::with_theme(&theme)
        .with_prompt("Feature name")
        .default(defaults.feature_name)
        .interact_text()?;

    let problem_statement: String = Input::with_theme(&theme)
        .with_prompt("What should the solution do for users?")
        .default(defaults.problem_statement)
        .interact_text()?;

    let users: String = Input::with_theme(&theme)
        .with_prompt("Target users (comma-separated)")
        .default(defaults.target_users.join(", "))
        .interact_text()?;

    let has_ai = Confirm::with_theme(&theme)
        .with_prompt("Does the feature include an AI/ML component?")
        .default(false)
        .interact()?;

    let model_type = if has_ai {
        let model: String = Input::with_theme(&theme)
            .with_prompt("Model type")
            .default("classifier".to_string())
            .interact_text()?;
        Some(model)
    } else {
        None
    };

    Ok(StarterAnswers {
        feature_name,
        problem_statement,
        target_users: split_list(&users),
        model_type,
    })
}

/// Build the starter record written by `prd init`
pub fn starter_record(answers: &StarterAnswers) -> InputRecord {
    let mut record = InputRecord::new()
        .with("feature_name", answers.feature_name.as_str())
        .with("problem_statement", answers.problem_statement.as_str())
        .with("target_users", answers.target_users.clone())
        .with(
            "business_goals",
            json!(["Improve user engagement", "Drive revenue growth"]),
        )
        .with("reach_estimate", 10_000)
        .with("impact_estimate", 1.0)
        .with("confidence_level", 0.8)
        .with("effort_estimate", 5)
        .with(
            "success_metrics",
            json!([{
                "name": "User Engagement",
                "baseline": "Current: X%",
                "target": "Target: Y%",
                "timeline": "3 months post-launch",
                "measurement": "Weekly active usage rate"
            }]),
        )
        .with(
            "technical_constraints",
            json!(["Performance", "Scalability", "Security"]),
        );

    if let Some(ref model_type) = answers.model_type {
        record.insert("ai_ml_requirements", json!({ "model_type": model_type }));
    }
    record
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Admins, End users ,,"), vec!["Admins", "End users"]);
    }

    #[test]
    fn test_starter_record_ai_optional() {
        let record = starter_record(&StarterAnswers::default());
        assert!(!record.contains("ai_ml_requirements"));

        let answers = StarterAnswers {
            model_type: Some("ranker".to_string()),
            ..StarterAnswers::default()
        };
        let record = starter_record(&answers);
        assert_eq!(
            record.get("ai_ml_requirements"),
            Some(&json!({"model_type": "ranker"}))
        );
        assert_eq!(record.get("target_users"), Some(&Value::from(vec!["End users"])));
    }

    #[test]
    fn test_init_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = InitOptions {
            root: dir.path().to_path_buf(),
            force: false,
            yes: true,
        };
        execute_init(options.clone()).unwrap();

        assert!(dir.path().join(CONFIG_FILE).exists());
        let record = InputRecord::load(dir.path().join(INPUT_FILE)).unwrap();
        assert_eq!(record.text_or("feature_name", ""), "New Feature");

        // Second run refuses to overwrite without --force
        assert!(execute_init(options.clone()).is_err());
        execute_init(InitOptions { force: true, ..options }).unwrap();
    }
}
