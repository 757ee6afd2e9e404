//! Path resolution for dpp.vim related directories.
//!
//! Environment lookups are captured once in a [`PathEnv`] and passed in
//! explicitly, so the migration pipeline stays testable with synthetic
//! paths instead of reading ambient process state.

use std::path::{Path, PathBuf};

/// Snapshot of the environment variables that drive path resolution.
#[derive(Debug, Clone)]
pub struct PathEnv {
    /// User home directory
    pub home: PathBuf,

    /// `XDG_CONFIG_HOME` (defaults to `~/.config`)
    pub xdg_config_home: PathBuf,

    /// `XDG_CACHE_HOME` (defaults to `~/.cache`)
    pub xdg_cache_home: PathBuf,
}

impl PathEnv {
    /// Capture path-related variables from the process environment.
    pub fn from_env() -> Self {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("~"));

        let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".config"));

        let xdg_cache_home = std::env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".cache"));

        Self { home, xdg_config_home, xdg_cache_home }
    }

    /// Build a synthetic environment rooted at the given home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            xdg_config_home: home.join(".config"),
            xdg_cache_home: home.join(".cache"),
            home,
        }
    }
}

/// Resolved dpp.vim paths.
#[derive(Debug, Clone)]
pub struct DppPaths {
    /// User home directory (for legacy locations like `~/.vimrc`)
    pub home: PathBuf,

    /// Neovim configuration root, `XDG_CONFIG_HOME/nvim`
    pub config_dir: PathBuf,

    /// dpp cache root, `XDG_CACHE_HOME/dpp`
    pub cache_dir: PathBuf,
}

impl DppPaths {
    /// Resolve dpp paths from a captured environment.
    pub fn resolve(env: &PathEnv) -> Self {
        Self {
            home: env.home.clone(),
            config_dir: env.xdg_config_home.join("nvim"),
            cache_dir: env.xdg_cache_home.join("dpp"),
        }
    }

    /// Path of the generated configuration file for the given extension.
    pub fn config_file(&self, extension: &str) -> PathBuf {
        self.config_dir.join(format!("dpp.{extension}"))
    }

    /// Directory where cloned plugin repositories live.
    pub fn plugins_dir(&self) -> PathBuf {
        self.cache_dir.join("repos").join("github.com")
    }

    /// The user's legacy vimrc path.
    pub fn vimrc(&self) -> PathBuf {
        self.home.join(".vimrc")
    }

    /// Resolve from a home directory directly.
    pub fn for_home(home: impl AsRef<Path>) -> Self {
        Self::resolve(&PathEnv::with_home(home.as_ref()))
    }
}
