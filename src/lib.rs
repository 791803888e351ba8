//! Configuration host for game plugins.
//!
//! Plugins declare a [`ConfigDescriptor`] per configuration file; the
//! [`ConfigHost`] resolves each descriptor to a path under the configuration
//! root, keys serializer selection on the descriptor's extension, and reads
//! and persists the backing file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod doctor;
pub mod formats;
pub mod host;
pub mod ui;

pub use descriptor::{ConfigDescriptor, StaticDescriptor};
pub use host::ConfigHost;
