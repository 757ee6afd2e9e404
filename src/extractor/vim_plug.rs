//! vim-plug extractor.
//!
//! Scans vimscript for `Plug '...'` commands. The only option key that
//! maps onto the canonical model is the filetype trigger `'for'`, which
//! becomes `on_ft`. Option dictionaries are matched shallowly, bounded
//! by the first `}`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{options, Extractor};
use crate::core::{CanonicalPlugin, PluginOptions};

static PLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"Plug\s+['"]([^'"]+)['"](?:\s*,\s*(\{[^}]*\}))?"#).unwrap());

static FOR_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"'for'\s*:\s*\[([^\]]+)\]").unwrap());

/// Extractor for vim-plug declarations.
pub struct VimPlugExtractor;

impl Extractor for VimPlugExtractor {
    fn name(&self) -> &str {
        "vim-plug"
    }

    fn extract(&self, source: &str) -> Vec<CanonicalPlugin> {
        PLUG.captures_iter(source)
            .map(|captures| {
                let repo = captures.get(1).map_or("", |m| m.as_str());
                let options = captures
                    .get(2)
                    .map_or_else(PluginOptions::default, |span| parse_options(span.as_str()));

                CanonicalPlugin { repo: repo.to_string(), options }
            })
            .collect()
    }
}

/// Normalize a vim-plug option dictionary span into canonical triggers.
fn parse_options(span: &str) -> PluginOptions {
    PluginOptions { on_cmd: None, on_ft: options::bracket_list(span, &FOR_KEY) }
}
