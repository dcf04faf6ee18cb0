//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::prd::DocumentMeta;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".prd.config.json";

fn default_config_schema() -> String {
    "https://prd-generator.dev/schemas/v1/config.schema.json".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// @acp:summary "Main configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON Schema URL for validation
    #[serde(rename = "$schema", default = "default_config_schema")]
    pub schema: String,

    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Header and revision history metadata
    #[serde(default)]
    pub document: DocumentMeta,

    /// Output paths configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// RICE scoring options
    #[serde(default)]
    pub rice: RiceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_config_schema(),
            version: default_version(),
            document: DocumentMeta::default(),
            output: OutputConfig::default(),
            rice: RiceConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a .prd.config.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from default location or create default config"
    pub fn load_or_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_default()
    }

    /// Get document output path
    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}

/// @acp:summary "Output file path configuration"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where `prd generate` writes the document
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("PRD.md")
}

/// @acp:summary "RICE scoring options"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiceConfig {
    /// Reject impact values off the 0.25/0.5/1/2/3 scale
    #[serde(default, rename = "strictImpact")]
    pub strict_impact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_path(), Path::new("PRD.md"));
        assert!(!config.rice.strict_impact);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "document": { "owner": "Dana Reyes" },
                "output": { "path": "docs/PRD.md" },
                "rice": { "strictImpact": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.document.owner, "Dana Reyes");
        assert_eq!(config.document.status, "Draft");
        assert_eq!(config.output_path(), Path::new("docs/PRD.md"));
        assert!(config.rice.strict_impact);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.document.author = "Product".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
