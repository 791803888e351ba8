// TOML format backend

use crate::formats::format_trait::ConfigFormat;
use anyhow::Result;
use serde_json::Value;

pub struct TomlFormat;

impl ConfigFormat for TomlFormat {
    fn extension(&self) -> &'static str {
        "toml"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(toml::from_str(text)?)
    }

    fn render(&self, value: &Value) -> Result<String> {
        // TOML requires a table at the top level; propagate the serializer
        // error for anything else.
        Ok(toml::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_table() {
        let text = "[village]\nspawn_weight = 12\nenabled = true\n";
        let value = TomlFormat.parse(text).unwrap();
        assert_eq!(value["village"]["spawn_weight"], 12);
        assert_eq!(value["village"]["enabled"], true);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(TomlFormat.parse("= broken").is_err());
    }

    #[test]
    fn test_rejects_non_table_top_level() {
        assert!(TomlFormat.render(&serde_json::json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_render_is_parseable() {
        let value = serde_json::json!({"kitchen": {"ovens": 2, "fuel": "charcoal"}});
        let text = TomlFormat.render(&value).unwrap();
        assert_eq!(TomlFormat.parse(&text).unwrap(), value);
    }
}
