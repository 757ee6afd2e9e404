//! Source extractors for plugin-manager dialects.
//!
//! This module contains extractors that scan configuration text written
//! for other plugin managers and produce canonical plugin declarations.
//! Matching is bounded, line-oriented pattern scanning, not a full
//! grammar; declarations that do not match are skipped silently.

mod dein;
mod options;
mod packer;
mod vim_plug;

pub use dein::DeinExtractor;
pub use packer::PackerExtractor;
pub use vim_plug::VimPlugExtractor;

use std::fmt;
use std::str::FromStr;

use crate::core::CanonicalPlugin;
use crate::migrate::MigrateError;

/// Trait for dialect extractors.
pub trait Extractor {
    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract canonical plugin declarations from source text.
    ///
    /// Infallible: malformed declarations are skipped, and the returned
    /// list preserves first-match order in the source text.
    fn extract(&self, source: &str) -> Vec<CanonicalPlugin>;
}

/// The plugin managers a configuration can be migrated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceManager {
    /// dein.vim (`dein#add` calls)
    Dein,
    /// vim-plug (`Plug` commands)
    VimPlug,
    /// packer.nvim (`use` calls)
    Packer,
}

impl SourceManager {
    /// All supported managers.
    pub const ALL: [SourceManager; 3] = [Self::Dein, Self::VimPlug, Self::Packer];

    /// CLI name of the manager.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dein => "dein",
            Self::VimPlug => "vim-plug",
            Self::Packer => "packer",
        }
    }

    /// The extractor for this manager's dialect.
    pub fn extractor(&self) -> Box<dyn Extractor> {
        match self {
            Self::Dein => Box::new(DeinExtractor),
            Self::VimPlug => Box::new(VimPlugExtractor),
            Self::Packer => Box::new(PackerExtractor),
        }
    }
}

impl fmt::Display for SourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceManager {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dein" => Ok(Self::Dein),
            "vim-plug" => Ok(Self::VimPlug),
            "packer" => Ok(Self::Packer),
            other => Err(MigrateError::UnsupportedManager(other.to_string())),
        }
    }
}

/// Extract canonical plugins from source text in the given dialect.
pub fn extract_plugins(manager: SourceManager, source: &str) -> Vec<CanonicalPlugin> {
    let extractor = manager.extractor();
    let plugins = extractor.extract(source);

    tracing::debug!(
        extractor = extractor.name(),
        count = plugins.len(),
        "Extracted plugin declarations"
    );

    plugins
}
