//! Import-specifier extension stripping (spec §4.5 point 1, §9 Open Question).
//!
//! The escaped form (`\.`) is used, not the unescaped `.(mjs|cjs|js)` variant
//! that also appears in the source material — see the Open Question
//! decision recorded in DESIGN.md.

use once_cell::sync::Lazy;
use regex::Regex;

static EXTENSION_BEFORE_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\.(mjs|cjs|js)(['"])"#).unwrap());

/// Strip a trailing `.js`/`.mjs`/`.cjs` module extension immediately before
/// the closing quote of a specifier, leaving everything else untouched.
/// Idempotent: applying this twice is the same as applying it once.
pub fn strip_js_extension(text: &str) -> String {
    EXTENSION_BEFORE_QUOTE
        .replace_all(text, |caps: &regex::Captures| caps[2].to_string())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_js_extension_from_specifier() {
        assert_eq!(
            strip_js_extension("import { A } from './a.js';"),
            "import { A } from './a';"
        );
    }

    #[test]
    fn strips_mjs_and_cjs_variants() {
        assert_eq!(strip_js_extension("from './a.mjs'"), "from './a'");
        assert_eq!(strip_js_extension("from './a.cjs'"), "from './a'");
    }

    #[test]
    fn is_idempotent() {
        let once = strip_js_extension("from './a.js'");
        let twice = strip_js_extension(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_non_extension_dots_untouched() {
        assert_eq!(strip_js_extension("from './a.util.js'"), "from './a.util'");
    }
}
