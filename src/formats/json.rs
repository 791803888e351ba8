// JSON format backend

use crate::formats::format_trait::ConfigFormat;
use anyhow::Result;
use serde_json::Value;

pub struct JsonFormat;

impl ConfigFormat for JsonFormat {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }

    fn render(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_object() {
        let value = JsonFormat.parse(r#"{"enabled": true, "radius": 4}"#).unwrap();
        assert_eq!(value["enabled"], true);
        assert_eq!(value["radius"], 4);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(JsonFormat.parse("{not json").is_err());
    }

    #[test]
    fn test_render_is_parseable() {
        let value = serde_json::json!({"a": [1, 2, 3]});
        let text = JsonFormat.render(&value).unwrap();
        assert_eq!(JsonFormat.parse(&text).unwrap(), value);
    }
}
