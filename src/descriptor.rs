// Descriptor module for named-configuration metadata

use anyhow::Result;

/// Characters that are never valid in a file name component
const ILLEGAL_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Capability contract for a single configuration file.
///
/// A plugin declares one descriptor per configuration file it owns. The host
/// resolves `directory` + `name` + `extension` into a concrete path and keys
/// serializer selection on `extension`; the descriptor itself performs no
/// parsing and no filesystem access.
pub trait ConfigDescriptor: Send + Sync {
    /// Logical identifier, used as the host's registry key.
    /// Must be stable across calls and across process restarts.
    fn name(&self) -> &str;

    /// File extension without the leading dot (e.g. "json5").
    fn extension(&self) -> &str;

    /// Storage directory relative to the host's configuration root.
    fn directory(&self) -> &str;
}

/// Validate a descriptor against the well-formedness rules
///
/// All three fields must be non-empty and contain only characters valid in
/// file paths. `name` and `extension` are single path components; `directory`
/// is a relative path with `/` separators and no `.` or `..` components.
pub fn validate(descriptor: &dyn ConfigDescriptor) -> Result<()> {
    validate_component("name", descriptor.name())?;

    let extension = descriptor.extension();
    validate_component("extension", extension)?;
    if extension.contains('.') {
        anyhow::bail!("Config extension '{}' must not contain a dot", extension);
    }

    let directory = descriptor.directory();
    if directory.is_empty() {
        anyhow::bail!("Config directory cannot be empty");
    }
    if directory.starts_with('/') || directory.starts_with('\\') {
        anyhow::bail!("Config directory '{}' must be relative", directory);
    }
    for component in directory.split('/') {
        if component.is_empty() {
            anyhow::bail!(
                "Config directory '{}' contains an empty path component",
                directory
            );
        }
        if component == "." || component == ".." {
            anyhow::bail!(
                "Config directory '{}' must not contain '.' or '..' components",
                directory
            );
        }
        validate_segment("directory", component)?;
    }

    Ok(())
}

fn validate_component(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("Config {} cannot be empty", field);
    }
    validate_segment(field, value)
}

fn validate_segment(field: &str, value: &str) -> Result<()> {
    if let Some(c) = value
        .chars()
        .find(|c| ILLEGAL_CHARS.contains(c) || c.is_whitespace() || c.is_control())
    {
        anyhow::bail!(
            "Config {} '{}' contains illegal character {:?}",
            field,
            value,
            c
        );
    }
    Ok(())
}

/// A descriptor backed by owned strings, fixed at construction.
///
/// This is the implementation most plugins want: declare the triple once at
/// registration time and hand it to the host. Two instances built from the
/// same triple compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDescriptor {
    name: String,
    extension: String,
    directory: String,
}

impl StaticDescriptor {
    /// Build a descriptor, rejecting triples that violate the
    /// well-formedness rules.
    pub fn new(
        name: impl Into<String>,
        extension: impl Into<String>,
        directory: impl Into<String>,
    ) -> Result<Self> {
        let descriptor = Self {
            name: name.into(),
            extension: extension.into(),
            directory: directory.into(),
        };
        validate(&descriptor)?;
        Ok(descriptor)
    }
}

impl ConfigDescriptor for StaticDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn directory(&self) -> &str {
        &self.directory
    }
}
