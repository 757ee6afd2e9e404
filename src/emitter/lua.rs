//! Lua emitter (`dpp.lua`).

use super::BOOTSTRAP_PLUGINS;
use crate::core::CanonicalPlugin;

/// Generate a Lua configuration body.
pub(super) fn generate(plugins: &[CanonicalPlugin]) -> String {
    let mut content = String::from("-- Migrated dpp.vim configuration\nreturn {\n  plugins = {\n");

    for repo in BOOTSTRAP_PLUGINS {
        content.push_str(&format!("    {{ repo = \"{repo}\" }},\n"));
    }
    content.push('\n');

    for plugin in plugins {
        content.push_str(&format!("    {{ repo = \"{}\"", plugin.repo));

        if let Some(commands) = &plugin.options.on_cmd {
            content.push_str(&format!(", on_cmd = {}", table_literal(commands)));
        }
        if let Some(filetypes) = &plugin.options.on_ft {
            content.push_str(&format!(", on_ft = {}", table_literal(filetypes)));
        }

        content.push_str(" },\n");
    }

    content.push_str("  },\n}\n");
    content
}

/// Render a string list as a Lua table literal, e.g. `{ "A", "B" }`.
fn table_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("{{ {} }}", quoted.join(", "))
}
