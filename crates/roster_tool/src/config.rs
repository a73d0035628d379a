//! Roster tool configuration
//!
//! Loaded from an optional YAML file; any missing field falls back to the
//! default preset.
//!
//! ```yaml
//! serving_marker: "(serve)"
//! show_roles: true
//! label_width: 12
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Text appended to the serving position's line
    pub serving_marker: String,
    /// Print each occupant's role next to the name
    pub show_roles: bool,
    /// Column width for position labels
    pub label_width: usize,
    /// Print the raw court view as JSON instead of text
    pub json_output: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            serving_marker: "<- serving".to_string(),
            show_roles: true,
            label_width: 12,
            json_output: false,
        }
    }
}

impl ToolConfig {
    /// Short lines for narrow terminals
    pub fn compact() -> Self {
        Self {
            serving_marker: "*".to_string(),
            show_roles: false,
            label_width: 0,
            json_output: false,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse tool config YAML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_yaml_uses_defaults() -> Result<()> {
        let cfg = ToolConfig::from_yaml_str("show_roles: false\n")?;
        assert!(!cfg.show_roles);
        assert_eq!(cfg.serving_marker, ToolConfig::default().serving_marker);
        assert_eq!(cfg.label_width, 12);
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "serving_marker: \"(S)\"\nlabel_width: 4\njson_output: true")?;
        let cfg = ToolConfig::load(file.path())?;
        assert_eq!(cfg.serving_marker, "(S)");
        assert_eq!(cfg.label_width, 4);
        assert!(cfg.json_output);
        Ok(())
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(ToolConfig::from_yaml_str("label_width: wide").is_err());
    }
}
