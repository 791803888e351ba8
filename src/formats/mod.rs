// Formats module for config file format backends

use std::collections::HashMap;
use std::sync::Arc;

pub mod format_trait;
pub mod json;
pub mod json5;
pub mod toml;
pub mod yaml;

pub use json::JsonFormat;
// self:: disambiguates the modules from the crates of the same name
pub use self::json5::Json5Format;
pub use self::toml::TomlFormat;
pub use yaml::YamlFormat;

// Re-export the trait
pub use format_trait::ConfigFormat;

/// Registry for config file formats, keyed on file extension
pub struct FormatRegistry {
    formats: HashMap<String, Arc<dyn ConfigFormat>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
        };

        registry.register(Arc::new(JsonFormat));
        registry.register(Arc::new(Json5Format));
        registry.register(Arc::new(TomlFormat));
        // YAML answers to both conventional extensions
        registry.register(Arc::new(YamlFormat::with_extension("yml")));
        registry.register(Arc::new(YamlFormat::with_extension("yaml")));

        registry
    }

    fn register(&mut self, format: Arc<dyn ConfigFormat>) {
        self.formats.insert(format.extension().to_string(), format);
    }

    pub fn get(&self, extension: &str) -> Option<&Arc<dyn ConfigFormat>> {
        self.formats.get(extension)
    }

    pub fn get_or_error(&self, extension: &str) -> anyhow::Result<&Arc<dyn ConfigFormat>> {
        self.get(extension).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported config format: '{}'. Supported extensions: {}",
                extension,
                self.extensions().join(", ")
            )
        })
    }

    /// Registered extensions in sorted order
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.formats.keys().cloned().collect();
        extensions.sort();
        extensions
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Global registry instance
lazy_static::lazy_static! {
    pub static ref REGISTRY: FormatRegistry = FormatRegistry::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_resolves_builtin_extensions() {
        for extension in ["json", "json5", "toml", "yml", "yaml"] {
            let format = REGISTRY.get(extension);
            assert!(format.is_some(), "missing format for '{}'", extension);
            assert_eq!(format.unwrap().extension(), extension);
        }
    }

    #[test]
    fn test_unknown_extension_lists_supported() {
        let err = REGISTRY.get_or_error("ini").err().unwrap();
        let message = err.to_string();
        assert!(message.contains("'ini'"), "unexpected message: {}", message);
        assert!(message.contains("json5"), "unexpected message: {}", message);
    }

    #[test]
    fn test_extensions_are_sorted() {
        let extensions = REGISTRY.extensions();
        let mut sorted = extensions.clone();
        sorted.sort();
        assert_eq!(extensions, sorted);
    }
}
