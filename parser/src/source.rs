//! Item source files for batch rendering.
//!
//! A source holds one tooltip body, its override arguments (in the order
//! they are applied) and optionally the title of the page the tooltip is
//! rendered on. Sources are YAML, or JSON when the file ends in `.json`.
//!
//! ```yaml
//! body: |
//!   Corrupted Ashbringer
//!   Soulbound
//! args:
//!   id: 50783
//!   ilvl: 284
//!   q: legendary
//! page: Corrupted Ashbringer
//! ```
//!
//! Scalar values are stringified, so numbers that must keep their exact
//! text (`speed: "2.60"`) should be quoted.

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::config::ConfigResult;

/// One item to parse and render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSource {
    pub body: String,
    #[serde(default)]
    pub args: Mapping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    }
}

impl ItemSource {
    /// Loads a source, choosing JSON or YAML by file extension.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be read and a JSON or YAML
    /// error when it does not decode.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let source = if is_json {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        Ok(source)
    }

    /// Override arguments as `(key, value)` text pairs, in file order.
    pub fn arguments(&self) -> Vec<(String, String)> {
        self.args
            .iter()
            .map(|(key, value)| (scalar_text(key), scalar_text(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_source_keeps_argument_order() {
        let source: ItemSource = serde_yaml::from_str(
            "body: \"Foo\\n30 Armor\"\nargs:\n  q: epic\n  id: 5\n  ilvl: 10\n  h: true\n",
        )
        .unwrap();
        assert_eq!(source.body, "Foo\n30 Armor");
        assert_eq!(
            source.arguments(),
            vec![
                ("q".to_string(), "epic".to_string()),
                ("id".to_string(), "5".to_string()),
                ("ilvl".to_string(), "10".to_string()),
                ("h".to_string(), "true".to_string()),
            ]
        );
        assert_eq!(source.page, None);
    }

    #[test]
    fn test_load_json_and_yaml() {
        let temp = TempDir::new().unwrap();
        let json = temp.path().join("item.json");
        std::fs::write(&json, r#"{"body": "Foo", "args": {"id": "1"}, "page": "Foo"}"#).unwrap();
        let source = ItemSource::load(&json).unwrap();
        assert_eq!(source.page.as_deref(), Some("Foo"));
        assert_eq!(source.arguments(), vec![("id".to_string(), "1".to_string())]);

        let yaml = temp.path().join("item.yml");
        std::fs::write(&yaml, "body: Bar\n").unwrap();
        let source = ItemSource::load(&yaml).unwrap();
        assert_eq!(source.body, "Bar");
        assert!(source.arguments().is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ItemSource::load(&path), Err(ConfigError::JsonError(_))));
    }
}
