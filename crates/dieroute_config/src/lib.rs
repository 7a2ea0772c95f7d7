//! Parsing and validation of `dieroute.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a strongly-typed
//! [`ProjectConfig`]: input file locations, routing options, and report
//! settings, with relative paths resolved against the project directory.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, validate_routing, CONFIG_FILE_NAME};
pub use resolve::{resolve_paths, ResolvedPaths};
pub use types::*;
