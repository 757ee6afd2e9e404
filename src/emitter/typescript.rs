//! TypeScript emitter (`dpp.ts`).

use super::{json_array, BOOTSTRAP_PLUGINS};
use crate::core::CanonicalPlugin;

const HEADER: &str = r#"// Migrated dpp.vim configuration
import type { Plugin } from "jsr:@shougo/dpp-vim/types";

export const config = {
  plugins: [
    // Core plugins
"#;

const FOOTER: &str = r"  ] satisfies Plugin[],
};
";

/// Generate a TypeScript configuration body.
pub(super) fn generate(plugins: &[CanonicalPlugin]) -> String {
    let mut content = String::from(HEADER);

    for repo in BOOTSTRAP_PLUGINS {
        content.push_str(&format!("    {{ repo: \"{repo}\" }},\n"));
    }
    content.push_str("\n    // Migrated plugins\n");

    for plugin in plugins {
        let mut fields = vec![format!("repo: \"{}\"", plugin.repo)];

        if let Some(commands) = &plugin.options.on_cmd {
            fields.push(format!("on_cmd: {}", json_array(commands)));
        }
        if let Some(filetypes) = &plugin.options.on_ft {
            fields.push(format!("on_ft: {}", json_array(filetypes)));
        }

        content.push_str(&format!("    {{ {} }},\n", fields.join(", ")));
    }

    content.push_str(FOOTER);
    content
}
