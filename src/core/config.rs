//! Global configuration management for dpp-cli.
//!
//! Handles loading and saving the profile store from a TOML file at
//! `XDG_CONFIG_HOME/dpp-cli/config.toml`. The migration pipeline never
//! reads this; it exists for the `dpp config` surface and for commands
//! that operate on an existing dpp.vim setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Editor flavor a profile targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorType {
    /// Vim
    Vim,
    /// Neovim
    Nvim,
}

impl EditorType {
    /// Name of the editor's entry-point configuration file.
    pub fn init_file_name(&self) -> &'static str {
        match self {
            Self::Vim => "vimrc",
            Self::Nvim => "init.lua",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vim => "vim",
            Self::Nvim => "nvim",
        }
    }
}

/// A named dpp.vim configuration profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// Editor configuration root, e.g. `~/.config/nvim`
    pub config_dir: PathBuf,

    /// Target editor
    pub editor: EditorType,

    /// Main dpp configuration file name, e.g. `dpp.ts`
    pub main_config: String,
}

/// The global configuration file: version plus the profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Config schema version
    pub version: String,

    /// Name of the active profile
    pub active_profile: String,

    /// All known profiles
    pub profiles: Vec<Profile>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            version: crate::VERSION.to_string(),
            active_profile: "default".to_string(),
            profiles: Vec::new(),
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration from the default location.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to_file(&path)
    }

    /// Save configuration to a specific file.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the global configuration file.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dpp-cli").join("config.toml"))
    }

    /// Look up the active profile, if any.
    pub fn active_profile(&self) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == self.active_profile)
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "default".to_string(),
            config_dir: PathBuf::from("/home/alice/.config/nvim"),
            editor: EditorType::Nvim,
            main_config: "dpp.ts".to_string(),
        }
    }

    #[test]
    fn test_default_config_has_no_profiles() {
        let config = GlobalConfig::default();
        assert_eq!(config.active_profile, "default");
        assert!(config.profiles.is_empty());
        assert!(config.active_profile().is_none());
    }

    #[test]
    fn test_active_profile_lookup() {
        let mut config = GlobalConfig::default();
        config.profiles.push(sample_profile());

        let active = config.active_profile().expect("active profile");
        assert_eq!(active.editor, EditorType::Nvim);
        assert_eq!(active.main_config, "dpp.ts");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dpp-cli").join("config.toml");

        let mut config = GlobalConfig::default();
        config.profiles.push(sample_profile());
        config.save_to_file(&path).unwrap();

        let loaded = GlobalConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.profiles.len(), 1);
        assert_eq!(loaded.profile("default"), Some(&sample_profile()));
    }

    #[test]
    fn test_editor_init_file_names() {
        assert_eq!(EditorType::Nvim.init_file_name(), "init.lua");
        assert_eq!(EditorType::Vim.init_file_name(), "vimrc");
    }
}
