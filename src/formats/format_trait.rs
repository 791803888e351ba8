// Trait definition for config file formats

use anyhow::Result;
use serde_json::Value;

/// Trait for config file formats (JSON, JSON5, TOML, YAML)
///
/// Backends translate between file text and a neutral `serde_json::Value`;
/// typed access happens above this trait via serde.
pub trait ConfigFormat: Send + Sync {
    /// The file extension this format is keyed on, without the leading dot
    fn extension(&self) -> &'static str;

    /// Parse file text into a value
    fn parse(&self, text: &str) -> Result<Value>;

    /// Render a value back into file text
    fn render(&self, value: &Value) -> Result<String>;
}
