// Host module for locating, loading, and persisting plugin config files

use crate::descriptor::{self, ConfigDescriptor};
use crate::formats::REGISTRY;
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration host
///
/// Plugins register descriptors; the host resolves each one to
/// `<root>/<directory>/<name>.<extension>`, keys serializer selection on the
/// extension, and reads/persists whole files. It keeps no open handles
/// between operations.
pub struct ConfigHost {
    root: PathBuf,
    descriptors: BTreeMap<String, Arc<dyn ConfigDescriptor>>,
}

impl ConfigHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            descriptors: BTreeMap::new(),
        }
    }

    /// Host rooted at the directory selected by PLUGCONF_DIR
    pub fn from_env() -> Self {
        Self::new(crate::config::config_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register a descriptor under its name.
    ///
    /// Rejects malformed descriptors, duplicate names, and extensions no
    /// registered format handles, so every registered config is guaranteed
    /// resolvable and loadable.
    pub fn register(&mut self, config: Arc<dyn ConfigDescriptor>) -> anyhow::Result<()> {
        descriptor::validate(config.as_ref())?;
        REGISTRY.get_or_error(config.extension())?;

        let name = config.name().to_string();
        if self.descriptors.contains_key(&name) {
            anyhow::bail!("Config '{}' is already registered", name);
        }

        debug!(
            "Registered config '{}' ({}/{}.{})",
            name,
            config.directory(),
            config.name(),
            config.extension()
        );
        self.descriptors.insert(name, config);
        Ok(())
    }

    pub fn descriptor(&self, name: &str) -> Option<&Arc<dyn ConfigDescriptor>> {
        self.descriptors.get(name)
    }

    fn get_or_error(&self, name: &str) -> anyhow::Result<&Arc<dyn ConfigDescriptor>> {
        self.descriptor(name).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown config: '{}'. Registered configs: {}",
                name,
                self.names().join(", ")
            )
        })
    }

    /// Registered config names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.keys().map(|k| k.as_str()).collect()
    }

    /// Absolute location of the backing file for a registered config
    pub fn resolve_path(&self, name: &str) -> anyhow::Result<PathBuf> {
        let config = self.get_or_error(name)?;
        let mut path = self.root.join(config.directory());
        path.push(format!("{}.{}", config.name(), config.extension()));
        Ok(path)
    }

    /// Read and parse the backing file. A missing file is an error; use
    /// `load_or_seed` for write-default-on-first-run behavior.
    pub fn load(&self, name: &str) -> anyhow::Result<Value> {
        let config = self.get_or_error(name)?;
        let format = REGISTRY.get_or_error(config.extension())?;
        let path = self.resolve_path(name)?;

        let text = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config '{}' at {}: {}", name, path.display(), e)
        })?;
        let value = format.parse(&text).map_err(|e| {
            anyhow::anyhow!("Failed to parse config '{}' at {}: {}", name, path.display(), e)
        })?;

        debug!("Loaded config '{}' from {}", name, path.display());
        Ok(value)
    }

    /// Render and persist a value as the backing file, creating the
    /// directory chain under the root as needed.
    pub fn store(&self, name: &str, value: &Value) -> anyhow::Result<()> {
        let config = self.get_or_error(name)?;
        let format = REGISTRY.get_or_error(config.extension())?;
        let path = self.resolve_path(name)?;

        let text = format.render(value)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, text)?;

        info!("Stored config '{}' at {}", name, path.display());
        Ok(())
    }

    /// Load the config, seeding the file with `default` when it does not
    /// exist yet.
    pub fn load_or_seed(&self, name: &str, default: &Value) -> anyhow::Result<Value> {
        let path = self.resolve_path(name)?;
        if !path.exists() {
            info!("Config '{}' missing, seeding {}", name, path.display());
            self.store(name, default)?;
            return Ok(default.clone());
        }
        self.load(name)
    }

    /// Load and deserialize into a typed config struct
    pub fn load_as<T: DeserializeOwned>(&self, name: &str) -> anyhow::Result<T> {
        let value = self.load(name)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize a typed config struct and persist it
    pub fn store_as<T: Serialize>(&self, name: &str, value: &T) -> anyhow::Result<()> {
        self.store(name, &serde_json::to_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::StaticDescriptor;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    fn host_with(descriptors: &[(&str, &str, &str)]) -> (TempDir, ConfigHost) {
        let dir = TempDir::new().unwrap();
        let mut host = ConfigHost::new(dir.path());
        for (name, extension, directory) in descriptors {
            host.register(Arc::new(
                StaticDescriptor::new(*name, *extension, *directory).unwrap(),
            ))
            .unwrap();
        }
        (dir, host)
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let (_dir, mut host) = host_with(&[("client", "json", "mymod")]);
        let duplicate = Arc::new(StaticDescriptor::new("client", "toml", "mymod").unwrap());
        let err = host.register(duplicate).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_register_rejects_unknown_extension() {
        let (_dir, mut host) = host_with(&[]);
        let config = Arc::new(StaticDescriptor::new("client", "ini", "mymod").unwrap());
        let err = host.register(config).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn test_resolve_path_layout() {
        let (dir, host) = host_with(&[(
            "delightful-chefs-config",
            "json5",
            "delightfulchefs",
        )]);
        let path = host.resolve_path("delightful-chefs-config").unwrap();
        assert_eq!(
            path,
            dir.path()
                .join("delightfulchefs")
                .join("delightful-chefs-config.json5")
        );
    }

    #[test]
    fn test_unknown_name_lists_registered() {
        let (_dir, host) = host_with(&[("client", "json", "mymod")]);
        let err = host.resolve_path("server").unwrap_err();
        assert!(err.to_string().contains("'server'"));
        assert!(err.to_string().contains("client"));
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let (_dir, host) = host_with(&[
            ("client", "json", "mymod"),
            ("server", "toml", "mymod"),
            ("trades", "yaml", "mymod/villagers"),
            ("worldgen", "json5", "mymod"),
        ]);
        let value = json!({"tier": {"level": 3, "label": "chef"}});

        for name in ["client", "server", "trades", "worldgen"] {
            host.store(name, &value).unwrap();
            assert_eq!(host.load(name).unwrap(), value, "roundtrip for '{}'", name);
        }
    }

    #[test]
    fn test_load_missing_file_errors() {
        let (_dir, host) = host_with(&[("client", "json", "mymod")]);
        let err = host.load("client").unwrap_err();
        assert!(err.to_string().contains("Failed to read config 'client'"));
    }

    #[test]
    fn test_load_or_seed_writes_default_once() {
        let (_dir, host) = host_with(&[("client", "json5", "mymod")]);
        let default = json!({"enabled": true});

        assert_eq!(host.load_or_seed("client", &default).unwrap(), default);
        assert!(host.resolve_path("client").unwrap().exists());

        // A second call must read the file, not re-seed it
        host.store("client", &json!({"enabled": false})).unwrap();
        assert_eq!(
            host.load_or_seed("client", &default).unwrap(),
            json!({"enabled": false})
        );
    }

    #[test]
    fn test_typed_roundtrip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct ChefConfig {
            trade_rolls: u32,
            enable_brewing: bool,
        }

        let (_dir, host) = host_with(&[("chefs", "toml", "delightfulchefs")]);
        let config = ChefConfig {
            trade_rolls: 3,
            enable_brewing: true,
        };

        host.store_as("chefs", &config).unwrap();
        let loaded: ChefConfig = host.load_as("chefs").unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_reports_parse_failure() {
        let (dir, host) = host_with(&[("client", "json", "mymod")]);
        let path = dir.path().join("mymod").join("client.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{broken").unwrap();

        let err = host.load("client").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config 'client'"));
    }
}
