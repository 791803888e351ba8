// JSON5 format backend
//
// Parsing is delegated to the json5 crate; this backend only adapts it to
// the ConfigFormat trait.

use crate::formats::format_trait::ConfigFormat;
use anyhow::Result;
use serde_json::Value;

pub struct Json5Format;

impl ConfigFormat for Json5Format {
    fn extension(&self) -> &'static str {
        "json5"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(json5::from_str(text)?)
    }

    fn render(&self, value: &Value) -> Result<String> {
        Ok(json5::to_string(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_comments_and_trailing_commas() {
        let text = r#"{
            // chef trades are rolled per villager level
            tradeRolls: 3,
            enableBrewing: true,
        }"#;
        let value = Json5Format.parse(text).unwrap();
        assert_eq!(value["tradeRolls"], 3);
        assert_eq!(value["enableBrewing"], true);
    }

    #[test]
    fn test_plain_json_is_valid_json5() {
        let value = Json5Format.parse(r#"{"a": 1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(Json5Format.parse("{unterminated: ").is_err());
    }

    #[test]
    fn test_render_is_parseable() {
        let value = serde_json::json!({"depth": {"min": 1, "max": 8}});
        let text = Json5Format.render(&value).unwrap();
        assert_eq!(Json5Format.parse(&text).unwrap(), value);
    }
}
