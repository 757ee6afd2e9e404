//! Option-span normalization shared by the extractors.
//!
//! Translates dialect-specific lazy-load option syntax into canonical
//! trigger lists. The span is searched for `key: [...]`; if the key is
//! present but no bracketed list follows, the key is omitted from the
//! result rather than reported as an error.

use regex::Regex;

/// Extract the bracketed list following `pattern` inside an option span.
///
/// `pattern` must contain a single capture group spanning the bracket
/// contents. Elements are split on commas, trimmed, and stripped of all
/// quote characters.
pub(super) fn bracket_list(span: &str, pattern: &Regex) -> Option<Vec<String>> {
    let captures = pattern.captures(span)?;
    let contents = captures.get(1)?.as_str();

    Some(
        contents
            .split(',')
            .map(|element| element.trim().replace(['\'', '"'], ""))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static ON_CMD: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"['"]?on_cmd['"]?\s*:\s*\[([^\]]+)\]"#).unwrap());

    #[test]
    fn test_splits_and_strips_quotes() {
        let list = bracket_list("{'on_cmd': ['NERDTreeToggle', \"Files\"]}", &ON_CMD).unwrap();
        assert_eq!(list, ["NERDTreeToggle", "Files"]);
    }

    #[test]
    fn test_trims_whitespace() {
        let list = bracket_list("{on_cmd: [ 'A' ,  'B' ]}", &ON_CMD).unwrap();
        assert_eq!(list, ["A", "B"]);
    }

    #[test]
    fn test_absent_key_yields_none() {
        assert!(bracket_list("{'on_ft': ['rust']}", &ON_CMD).is_none());
    }

    #[test]
    fn test_key_without_list_yields_none() {
        // Keyword present but the bracketed list cannot be located.
        assert!(bracket_list("{'on_cmd': 'NotAList'}", &ON_CMD).is_none());
    }
}
