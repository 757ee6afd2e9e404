//! TOML emitter (`dpp.toml`).

use super::{json_array, BOOTSTRAP_PLUGINS};
use crate::core::CanonicalPlugin;

/// Generate a TOML configuration body.
pub(super) fn generate(plugins: &[CanonicalPlugin]) -> String {
    let mut content = String::from("# Migrated dpp.vim configuration\n\n");

    for repo in BOOTSTRAP_PLUGINS {
        content.push_str(&format!("[[plugins]]\nrepo = \"{repo}\"\n\n"));
    }

    for plugin in plugins {
        content.push_str("[[plugins]]\n");
        content.push_str(&format!("repo = \"{}\"\n", plugin.repo));

        if let Some(commands) = &plugin.options.on_cmd {
            content.push_str(&format!("on_cmd = {}\n", json_array(commands)));
        }
        if let Some(filetypes) = &plugin.options.on_ft {
            content.push_str(&format!("on_ft = {}\n", json_array(filetypes)));
        }

        content.push('\n');
    }

    content
}
