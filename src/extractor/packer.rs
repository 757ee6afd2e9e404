//! packer.nvim extractor.
//!
//! Scans Lua for `use` declarations. Both the bare string form and the
//! table form (positional repo or explicit `repo = '...'`) are matched,
//! but only the repository identifier is extracted; packer option keys
//! such as `cmd` or `ft` are ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Extractor;
use crate::core::CanonicalPlugin;

static USE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"use\s*(?:\{[^}]*repo\s*=\s*|\{\s*)?['"]([^'"]+)['"]"#).unwrap()
});

/// Extractor for packer.nvim declarations.
pub struct PackerExtractor;

impl Extractor for PackerExtractor {
    fn name(&self) -> &str {
        "packer"
    }

    fn extract(&self, source: &str) -> Vec<CanonicalPlugin> {
        USE_CALL
            .captures_iter(source)
            .map(|captures| {
                let repo = captures.get(1).map_or("", |m| m.as_str());
                CanonicalPlugin::new(repo)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_form() {
        let plugins = PackerExtractor.extract("use 'wbthomason/packer.nvim'");

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].repo, "wbthomason/packer.nvim");
        assert!(plugins[0].options.is_empty());
    }

    #[test]
    fn test_table_form_ignores_options() {
        let plugins = PackerExtractor.extract("use {'owner/x', cmd = 'X'}");

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].repo, "owner/x");
        assert!(plugins[0].options.is_empty());
    }

    #[test]
    fn test_explicit_repo_key() {
        let plugins = PackerExtractor.extract("use { ft = 'go', repo = 'fatih/vim-go' }");

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].repo, "fatih/vim-go");
    }

    #[test]
    fn test_plugins_lua_block_in_order() {
        let source = r#"
return require('packer').startup(function(use)
  use 'wbthomason/packer.nvim'
  use {'nvim-telescope/telescope.nvim', cmd = 'Telescope'}
  use 'neovim/nvim-lspconfig'
end)
"#;
        let plugins = PackerExtractor.extract(source);
        let repos: Vec<&str> = plugins.iter().map(|p| p.repo.as_str()).collect();

        assert_eq!(
            repos,
            ["wbthomason/packer.nvim", "nvim-telescope/telescope.nvim", "neovim/nvim-lspconfig"]
        );
    }

    #[test]
    fn test_table_without_repo_string_is_skipped() {
        assert!(PackerExtractor.extract("use { config = setup }").is_empty());
    }
}
