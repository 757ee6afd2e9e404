//! Configuration emitters for dpp.vim.
//!
//! Each emitter turns a canonical plugin list into a complete, loadable
//! dpp.vim configuration file body. Emission is pure and deterministic:
//! identical input produces byte-identical output.

mod lua;
mod toml_out;
mod typescript;
mod vimscript;

use std::fmt;
use std::str::FromStr;

use crate::core::CanonicalPlugin;
use crate::migrate::MigrateError;

/// The two bootstrap declarations every generated configuration starts
/// with: the plugin manager core and its runtime dependency.
pub const BOOTSTRAP_PLUGINS: [&str; 2] = ["Shougo/dpp.vim", "vim-denops/denops.vim"];

/// Output formats a dpp.vim configuration can be generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// TypeScript (`dpp.ts`)
    Ts,
    /// TOML (`dpp.toml`)
    Toml,
    /// Lua (`dpp.lua`)
    Lua,
    /// Vimscript (`dpp.vim`)
    Vim,
}

impl OutputFormat {
    /// All supported formats.
    pub const ALL: [OutputFormat; 4] = [Self::Ts, Self::Toml, Self::Lua, Self::Vim];

    /// File extension (also the CLI name) of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Toml => "toml",
            Self::Lua => "lua",
            Self::Vim => "vim",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ts" => Ok(Self::Ts),
            "toml" => Ok(Self::Toml),
            "lua" => Ok(Self::Lua),
            "vim" => Ok(Self::Vim),
            other => Err(MigrateError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Generate a configuration file body for the given format.
pub fn generate_config(format: OutputFormat, plugins: &[CanonicalPlugin]) -> String {
    match format {
        OutputFormat::Ts => typescript::generate(plugins),
        OutputFormat::Toml => toml_out::generate(plugins),
        OutputFormat::Lua => lua::generate(plugins),
        OutputFormat::Vim => vimscript::generate(plugins),
    }
}

/// Render a string list as a JSON array literal, e.g. `["A","B"]`.
///
/// Used by the TypeScript, TOML, and Vimscript emitters, which all share
/// JSON array syntax for trigger lists.
pub(crate) fn json_array(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
