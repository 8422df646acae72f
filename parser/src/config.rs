//! Rendering configuration.
//!
//! Every setting has a default matching the wiki the tooltips were written
//! for, so a config file only needs the keys it changes.
//!
//! # Example YAML
//!
//! ```yaml
//! help_page: "Help:Items"
//! placeholder_icon: Temp
//! own_page_icon_size: 3
//! embedded_icon_size: 4
//! category: Item pages
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use item_tooltip_core::FinalizeOptions;

/// Errors raised while reading or writing configuration and item sources.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ConfigError`].
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings shared by the renderer, the metadata line and error markup.
///
/// # Examples
///
/// ```
/// use item_tooltip_parser::TooltipConfig;
///
/// let config: TooltipConfig = serde_yaml::from_str("help_page: \"Project:Items\"").unwrap();
/// assert_eq!(config.help_page, "Project:Items");
/// assert_eq!(config.placeholder_icon, "Temp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Page linked from every error message.
    pub help_page: String,
    /// Icon used when an item defines none.
    pub placeholder_icon: String,
    /// `{{Icon}}` size on the item's own page.
    pub own_page_icon_size: u8,
    /// `{{Icon}}` size when the tooltip is embedded elsewhere.
    pub embedded_icon_size: u8,
    /// Category the metadata line files item pages under.
    pub category: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            help_page: "Help:Items".to_string(),
            placeholder_icon: "Temp".to_string(),
            own_page_icon_size: 3,
            embedded_icon_size: 4,
            category: "Item pages".to_string(),
        }
    }
}

impl TooltipConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read, or
    /// [`ConfigError::YamlError`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    pub fn finalize_options(&self) -> FinalizeOptions {
        FinalizeOptions {
            placeholder_icon: self.placeholder_icon.clone(),
        }
    }

    pub fn icon_size(&self, own_page: bool) -> u8 {
        if own_page {
            self.own_page_icon_size
        } else {
            self.embedded_icon_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TooltipConfig::default();
        assert_eq!(config.help_page, "Help:Items");
        assert_eq!(config.icon_size(true), 3);
        assert_eq!(config.icon_size(false), 4);
        assert_eq!(config.finalize_options().placeholder_icon, "Temp");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: TooltipConfig =
            serde_yaml::from_str("placeholder_icon: INV_Misc_QuestionMark\nown_page_icon_size: 5\n")
                .unwrap();
        assert_eq!(config.placeholder_icon, "INV_Misc_QuestionMark");
        assert_eq!(config.own_page_icon_size, 5);
        assert_eq!(config.embedded_icon_size, 4);
        assert_eq!(config.category, "Item pages");
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tooltip.yml");
        let config = TooltipConfig {
            help_page: "Project:Item help".to_string(),
            ..TooltipConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(TooltipConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TooltipConfig::load("/nonexistent/tooltip.yml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
