//! Lexical regex rule set (spec §4.3).
//!
//! Every pattern here is fixed, module-level data — no ambient state, no
//! per-call compilation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading `import type ` on an import statement.
pub static IMPORT_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^import\s+type\s+").unwrap());

/// Leading `export type ` on an export statement.
pub static EXPORT_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^export\s+type\s+").unwrap());

/// `import`/`export` keyword followed by a named-specifier brace group,
/// with an optional preceding default specifier (`import type Default, { type A }`).
pub static IMPORT_EXPORT_WITH_DEFAULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<kw>import|export)(?P<default>\s+[A-Za-z_$][\w$]*\s*,)?\s*\{(?P<names>[^}]*)\}").unwrap()
});

/// Same shape without the default-specifier group, kept as a distinct named
/// rule per spec (the two patterns share one implementation).
pub static IMPORT_EXPORT_NAMES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<kw>import|export)\s*\{(?P<names>[^}]*)\}").unwrap()
});

/// The `type ` modifier inside a named-specifier list, e.g. `{ type Foo, Bar }`.
pub static TYPE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btype\s+").unwrap());

/// Word / JSDoc block / line comment / quoted string / template literal /
/// single punctuation character, in that preference order.
pub static TOKENIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)(?:/\*\*.*?\*/|/\*.*?\*/|//[^\n]*|`(?:\\.|[^`\\])*`|"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|[A-Za-z_$][A-Za-z0-9_$]*|[0-9]+(?:\.[0-9]+)?|.)"#,
    )
    .unwrap()
});

/// Identifiers made only of the identifier charset, checked separately so
/// callers can distinguish a "word" token from punctuation/strings/comments.
pub static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Path segment that marks a specifier as resolving into a third-party package.
pub static NODE_MODULES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|/)node_modules/").unwrap());

/// Strip `type ` modifiers from each specifier inside a named-import/export
/// brace group (`IMPORT_EXPORT_NAMES` / `IMPORT_EXPORT_WITH_DEFAULT` callback).
pub fn strip_specifier_type_modifiers(text: &str) -> String {
    IMPORT_EXPORT_WITH_DEFAULT
        .replace_all(text, |caps: &regex::Captures| {
            let kw = &caps["kw"];
            let default = caps.name("default").map(|m| m.as_str()).unwrap_or("");
            let names = TYPE_WORD.replace_all(&caps["names"], "");
            format!("{kw}{default} {{{names}}}")
        })
        .into_owned()
}

/// The capital-letter heuristic (§4.3, §9 Open Question — implemented as a
/// fallback, never the primary classification; see `dtsroll-forward`'s
/// tokeniser for how it's gated behind the referenced-names set).
pub fn looks_like_capitalized_identifier(token: &str) -> bool {
    WORD.is_match(token) && token.chars().any(|c| c.is_ascii_uppercase())
}

/// Whether `token` is a bare word (identifier-shaped), as opposed to a
/// comment, string, template literal, or punctuation token from `TOKENIZE`.
pub fn is_word_token(token: &str) -> bool {
    WORD.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_type_strips_leading_type() {
        let text = "import type Foo from 'foo';";
        assert!(IMPORT_TYPE.is_match(text));
        let rest = IMPORT_TYPE.replace(text, "import ");
        assert_eq!(rest, "import Foo from 'foo';");
    }

    #[test]
    fn export_type_strips_leading_type() {
        let text = "export type { Foo };";
        assert!(EXPORT_TYPE.is_match(text));
    }

    #[test]
    fn strips_type_word_from_specifier_list() {
        let text = "import { type A, B }";
        let stripped = strip_specifier_type_modifiers(text);
        assert!(!stripped.contains("type "));
        assert!(stripped.contains('A'));
        assert!(stripped.contains('B'));
    }

    #[test]
    fn node_modules_matches_nested_segment() {
        assert!(NODE_MODULES.is_match("./node_modules/foo/index.d.ts"));
        assert!(!NODE_MODULES.is_match("./src/node_modules_fake.ts"));
    }

    #[test]
    fn capital_letter_heuristic_requires_uppercase() {
        assert!(looks_like_capitalized_identifier("MyType"));
        assert!(!looks_like_capitalized_identifier("myVar"));
        assert!(!looks_like_capitalized_identifier("\"Quoted\""));
    }

    #[test]
    fn tokenize_splits_words_strings_and_punctuation() {
        let text = r#"interface Foo { a: "x"; }"#;
        let tokens: Vec<&str> = TOKENIZE.find_iter(text).map(|m| m.as_str()).collect();
        assert!(tokens.contains(&"interface"));
        assert!(tokens.contains(&"Foo"));
        assert!(tokens.contains(&"\"x\""));
        assert!(tokens.contains(&"{"));
    }
}
