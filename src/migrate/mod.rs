//! Migration orchestrator.
//!
//! Drives the pipeline: locate the source configuration, extract the
//! canonical plugin list, emit the target format, and either echo the
//! result (dry run) or write it once to the resolved output path.
//! Every failure is terminal for the invocation; there is no retry or
//! partial-success path.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::DppPaths;
use crate::emitter::{generate_config, OutputFormat};
use crate::extractor::{extract_plugins, SourceManager};

/// Terminal migration failures.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// `--from` named a manager outside the supported set
    #[error("Unsupported plugin manager: {0}")]
    UnsupportedManager(String),

    /// `--format` named a format outside the supported set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// No source configuration file could be located
    #[error("{}", config_not_found_message(.manager, .path.as_deref()))]
    ConfigNotFound {
        /// The manager whose configuration was being looked for
        manager: SourceManager,
        /// The explicit path that was probed, if one was given
        path: Option<PathBuf>,
    },

    /// The output path already has a file; migration never overwrites
    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// Reading the source or writing the output failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// The path involved
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

fn config_not_found_message(manager: &SourceManager, path: Option<&std::path::Path>) -> String {
    match path {
        Some(p) => format!("Configuration file not found: {}", p.display()),
        None => format!("Could not find {manager} configuration file"),
    }
}

impl MigrateError {
    /// One-line remediation hint for the user, where one exists.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedManager(_) => Some("Supported: dein, vim-plug, packer"),
            Self::UnsupportedFormat(_) => Some("Supported: ts, toml, lua, vim"),
            Self::ConfigNotFound { path: None, .. } => {
                Some("Please specify with --config option")
            }
            Self::OutputExists(_) => Some("Please backup or remove it first"),
            _ => None,
        }
    }
}

/// Validated migration options.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Plugin manager to migrate from
    pub manager: SourceManager,
    /// Explicit source path, if given; auto-detected otherwise
    pub config: Option<PathBuf>,
    /// Show the generated configuration without writing a file
    pub dry_run: bool,
    /// Output format for the generated configuration
    pub format: OutputFormat,
}

impl MigrateOptions {
    /// Parse raw CLI values. The format is validated first so an invalid
    /// `--format` is rejected before any extraction work.
    pub fn from_args(
        from: &str,
        config: Option<&str>,
        dry_run: bool,
        format: &str,
    ) -> Result<Self, MigrateError> {
        let format: OutputFormat = format.parse()?;
        let manager: SourceManager = from.parse()?;
        let config = config.map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()));

        Ok(Self { manager, config, dry_run, format })
    }
}

/// Outcome of a successful migration invocation.
#[derive(Debug)]
pub enum MigrationOutcome {
    /// Extraction matched zero declarations; nothing was generated.
    /// A soft condition, not a failure.
    NoPlugins {
        /// The source file that was scanned
        source: PathBuf,
    },

    /// Dry run: the generated configuration is returned for inspection
    DryRun {
        /// The source file that was scanned
        source: PathBuf,
        /// Number of migrated plugins
        count: usize,
        /// The generated configuration body
        output: String,
    },

    /// The configuration was written to disk
    Written {
        /// The source file that was scanned
        source: PathBuf,
        /// Number of migrated plugins
        count: usize,
        /// The created output file
        path: PathBuf,
    },
}

/// Runs migrations against an explicit set of resolved paths.
pub struct Migrator {
    paths: DppPaths,
}

impl Migrator {
    /// Create a migrator over the given paths.
    ///
    /// Paths are injected rather than read from the process environment
    /// so the pipeline can run against synthetic layouts in tests.
    pub fn new(paths: DppPaths) -> Self {
        Self { paths }
    }

    /// Run a migration.
    pub fn run(&self, opts: &MigrateOptions) -> Result<MigrationOutcome, MigrateError> {
        // Detect
        let source = self.resolve_source(opts)?;

        let content = fs::read_to_string(&source)
            .map_err(|e| MigrateError::Io { path: source.clone(), source: e })?;

        // Parse + emit
        let plugins = extract_plugins(opts.manager, &content);
        if plugins.is_empty() {
            tracing::warn!(source = %source.display(), "No plugins found in configuration");
            return Ok(MigrationOutcome::NoPlugins { source });
        }

        let count = plugins.len();
        let output = generate_config(opts.format, &plugins);

        // Materialize
        if opts.dry_run {
            return Ok(MigrationOutcome::DryRun { source, count, output });
        }

        let target = self.paths.config_file(opts.format.extension());
        if target.exists() {
            return Err(MigrateError::OutputExists(target));
        }

        fs::create_dir_all(&self.paths.config_dir)
            .map_err(|e| MigrateError::Io { path: self.paths.config_dir.clone(), source: e })?;
        fs::write(&target, &output)
            .map_err(|e| MigrateError::Io { path: target.clone(), source: e })?;

        tracing::debug!(target = %target.display(), count, "Wrote migrated configuration");

        Ok(MigrationOutcome::Written { source, count, path: target })
    }

    /// Resolve the source file: explicit path or first existing candidate.
    fn resolve_source(&self, opts: &MigrateOptions) -> Result<PathBuf, MigrateError> {
        if let Some(path) = &opts.config {
            if !path.exists() {
                return Err(MigrateError::ConfigNotFound {
                    manager: opts.manager,
                    path: Some(path.clone()),
                });
            }
            return Ok(path.clone());
        }

        self.candidate_paths(opts.manager)
            .into_iter()
            .find(|candidate| candidate.exists())
            .ok_or(MigrateError::ConfigNotFound { manager: opts.manager, path: None })
    }

    /// Per-manager candidate configuration paths, in probe order.
    fn candidate_paths(&self, manager: SourceManager) -> Vec<PathBuf> {
        let config_dir = &self.paths.config_dir;
        match manager {
            SourceManager::Dein => vec![
                config_dir.join("init.vim"),
                config_dir.join("init.lua"),
                self.paths.vimrc(),
            ],
            SourceManager::VimPlug => vec![config_dir.join("init.vim"), self.paths.vimrc()],
            SourceManager::Packer => vec![
                config_dir.join("lua").join("plugins.lua"),
                config_dir.join("init.lua"),
            ],
        }
    }
}
