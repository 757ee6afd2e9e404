//! # dpp-cli
//!
//! Configuration CLI for [dpp.vim], the dark powered plugin manager.
//!
//! The heart of the crate is the migration engine: it scans a
//! configuration written for another plugin manager (dein, vim-plug,
//! packer), extracts a canonical plugin list with bounded pattern
//! matching, and re-emits it as a loadable dpp.vim configuration in
//! TypeScript, TOML, Lua, or Vimscript.
//!
//! ```bash
//! # Preview a migration from vim-plug
//! dpp migrate --from vim-plug --dry-run
//!
//! # Write a TOML configuration migrated from dein
//! dpp migrate --from dein --format toml
//! ```
//!
//! [dpp.vim]: https://github.com/Shougo/dpp.vim

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod core;
pub mod emitter;
pub mod extractor;
pub mod migrate;

// Re-export commonly used types
pub use crate::core::{CanonicalPlugin, DppPaths, GlobalConfig, PathEnv, PluginOptions, Profile};
pub use crate::emitter::{generate_config, OutputFormat, BOOTSTRAP_PLUGINS};
pub use crate::extractor::{extract_plugins, Extractor, SourceManager};
pub use crate::migrate::{MigrateError, MigrateOptions, MigrationOutcome, Migrator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "dpp";
