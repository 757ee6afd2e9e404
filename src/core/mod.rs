//! Core data structures for dpp-cli.
//!
//! Contains the canonical plugin model shared by extractors and
//! emitters, path resolution, and the profile configuration store.

mod config;
mod paths;
mod plugin;

pub use config::{EditorType, GlobalConfig, Profile};
pub use paths::{DppPaths, PathEnv};
pub use plugin::{CanonicalPlugin, PluginOptions};
