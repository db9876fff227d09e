//! Tokenisation rule (spec §4.4 "Tokenisation rule").

use dtsroll_ast::regex_rules::{is_word_token, looks_like_capitalized_identifier, TOKENIZE};
use rustc_hash::FxHashSet;

use crate::dynamic_import::{self, DynamicImportExpander};
use crate::error::ForwardError;

#[derive(Debug, Clone)]
pub enum Token {
    Ident(String),
    /// Already fully rendered as a JS double-quoted string literal,
    /// including surrounding quotes.
    Str(String),
}

/// Tokenise `text`, expanding any dynamic type-imports found along the way.
/// Returns the statements the expander injected (to be emitted ahead of the
/// statement being tokenised) and the token stream itself.
pub fn tokenize(
    file: &str,
    text: &str,
    referenced_names: &FxHashSet<String>,
    expander: &mut DynamicImportExpander,
) -> Result<(Vec<String>, Vec<Token>), ForwardError> {
    let mut pre_statements = Vec::new();
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some((range, module, access)) = dynamic_import::find(rest) {
            if range.start == 0 {
                let expansion = expander.expand(file, &module, &access)?;
                pre_statements.extend(expansion.pre_statements);
                tokens.push(Token::Ident(expansion.identifier));
                pos += range.end;
                continue;
            }
        }

        let m = TOKENIZE
            .find(rest)
            .expect("TOKENIZE always matches at the current position");
        let raw = m.as_str();

        if is_word_token(raw)
            && (referenced_names.contains(raw) || looks_like_capitalized_identifier(raw))
        {
            tokens.push(Token::Ident(raw.to_string()));
        } else {
            tokens.push(Token::Str(render_string_literal(raw)));
        }

        pos += raw.len().max(1);
    }

    Ok((pre_statements, tokens))
}

/// Render arbitrary source text as a JS double-quoted string literal: apply
/// the newline/tab escape codec, then escape backslashes and quotes so the
/// original text (which may itself contain quotes or backticks) survives.
fn render_string_literal(raw: &str) -> String {
    let codec_escaped = dtsroll_codec::escape(raw);
    let mut out = String::with_capacity(codec_escaped.len() + 2);
    out.push('"');
    for ch in codec_escaped.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Render a token stream back to the array-literal source text, e.g.
/// `[interface, " ", Foo, " ", "{", …]`.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Ident(name) => name.clone(),
            Token::Str(literal) => literal.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_becomes_identifier_token() {
        let mut referenced = FxHashSet::default();
        referenced.insert("Foo".to_string());
        let mut expander = DynamicImportExpander::new();
        let (pre, tokens) = tokenize("f.d.ts", "Foo", &referenced, &mut expander).unwrap();
        assert!(pre.is_empty());
        assert!(matches!(tokens[0], Token::Ident(ref n) if n == "Foo"));
    }

    #[test]
    fn unknown_lowercase_word_becomes_string_token() {
        let referenced = FxHashSet::default();
        let mut expander = DynamicImportExpander::new();
        let (_, tokens) = tokenize("f.d.ts", "interface", &referenced, &mut expander).unwrap();
        assert!(matches!(tokens[0], Token::Str(ref s) if s == "\"interface\""));
    }

    #[test]
    fn unknown_capitalized_word_falls_back_to_identifier() {
        let referenced = FxHashSet::default();
        let mut expander = DynamicImportExpander::new();
        let (_, tokens) = tokenize("f.d.ts", "Promise", &referenced, &mut expander).unwrap();
        assert!(matches!(tokens[0], Token::Ident(ref n) if n == "Promise"));
    }

    #[test]
    fn dynamic_import_is_expanded_inline() {
        let referenced = FxHashSet::default();
        let mut expander = DynamicImportExpander::new();
        let (pre, tokens) =
            tokenize("f.d.ts", "import('./m').User", &referenced, &mut expander).unwrap();
        assert_eq!(pre.len(), 1);
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn string_literal_with_embedded_quote_round_trips_through_codec() {
        let raw = "\"she said \\\"hi\\\"\"";
        let literal = render_string_literal(raw);
        assert!(literal.starts_with('"') && literal.ends_with('"'));
    }
}
