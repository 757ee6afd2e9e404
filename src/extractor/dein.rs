//! dein.vim extractor.
//!
//! Scans vimscript for `dein#add(...)` calls, with or without the
//! leading `call`. The option dictionary is matched shallowly: the span
//! ends at the first `}`, so declarations whose options nest braces more
//! than one level deep are not bounded correctly and end up skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{options, Extractor};
use crate::core::{CanonicalPlugin, PluginOptions};

static DEIN_ADD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:call\s+)?dein#add\s*\(\s*['"]([^'"]+)['"]\s*(?:,\s*(\{[^}]*\}))?\s*\)"#)
        .unwrap()
});

static ON_CMD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"]?on_cmd['"]?\s*:\s*\[([^\]]+)\]"#).unwrap());

static ON_FT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"]?on_ft['"]?\s*:\s*\[([^\]]+)\]"#).unwrap());

/// Extractor for dein.vim declarations.
pub struct DeinExtractor;

impl Extractor for DeinExtractor {
    fn name(&self) -> &str {
        "dein"
    }

    fn extract(&self, source: &str) -> Vec<CanonicalPlugin> {
        DEIN_ADD
            .captures_iter(source)
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

/// Normalize a dein option dictionary span into canonical triggers.
fn parse_options(span: &str) -> PluginOptions {
    PluginOptions {
        on_cmd: options::bracket_list(span, &ON_CMD),
        on_ft: options::bracket_list(span, &ON_FT),
    }
}
