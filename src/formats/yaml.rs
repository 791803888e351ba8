// YAML format backend
//
// Registered under both "yml" and "yaml"; see the registry in mod.rs.

use crate::formats::format_trait::ConfigFormat;
use anyhow::Result;
use serde_json::Value;

pub struct YamlFormat {
    extension: &'static str,
}

impl YamlFormat {
    pub fn with_extension(extension: &'static str) -> Self {
        Self { extension }
    }
}

impl ConfigFormat for YamlFormat {
    fn extension(&self) -> &'static str {
        self.extension
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn render(&self, value: &Value) -> Result<String> {
        Ok(serde_yaml::to_string(value)?)
    }
}
