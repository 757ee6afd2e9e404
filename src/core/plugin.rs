//! Canonical plugin data structures.
//!
//! Defines the `CanonicalPlugin` struct that represents one plugin
//! declaration extracted from a source configuration, independent of
//! the dialect it was written in.

use serde::{Deserialize, Serialize};

/// A plugin declaration in canonical, dialect-independent form.
///
/// Constructed once per matched declaration during extraction and
/// consumed exactly once by the emitter that serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPlugin {
    /// Repository identifier in `owner/name` form, as found in the source
    pub repo: String,

    /// Recognized lazy-load trigger options
    #[serde(default)]
    pub options: PluginOptions,
}

/// Lazy-load trigger options recognized by the canonical model.
///
/// The key set is closed: dialect options that do not map onto one of
/// these fields are dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Commands that trigger loading the plugin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_cmd: Option<Vec<String>>,

    /// Filetypes that trigger loading the plugin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_ft: Option<Vec<String>>,
}

impl PluginOptions {
    /// Whether no trigger options were recognized.
    pub fn is_empty(&self) -> bool {
        self.on_cmd.is_none() && self.on_ft.is_none()
    }
}

impl CanonicalPlugin {
    /// Create a plugin declaration with no options.
    pub fn new(repo: impl Into<String>) -> Self {
        Self { repo: repo.into(), options: PluginOptions::default() }
    }

    /// Set the `on_cmd` trigger list.
    #[must_use]
    pub fn with_on_cmd(mut self, commands: Vec<String>) -> Self {
        self.options.on_cmd = Some(commands);
        self
    }

    /// Set the `on_ft` trigger list.
    #[must_use]
    pub fn with_on_ft(mut self, filetypes: Vec<String>) -> Self {
        self.options.on_ft = Some(filetypes);
        self
    }
}
