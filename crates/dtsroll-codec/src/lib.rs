//! Token escape codec (spec §4.1).
//!
//! Fake-JS string tokens can't carry a literal newline or tab: some bundlers
//! rewrite long or escape-rich string literals into template literals, and a
//! stray backtick in the original declaration text would then corrupt the
//! rewrite. Newlines and tabs are instead represented as a three-character
//! marker: a Private-Use-Area code point, a tagged ASCII body, and the same
//! code point again. The markers are chosen to be vanishingly unlikely in
//! user-authored TypeScript, to survive a bundler's string handling
//! byte-for-byte, and to be cheap to scan back out.

/// Shared Private-Use-Area code point bracketing every marker.
const MARKER: char = '\u{E000}';
const NEWLINE_TAG: char = 'N';
const TAB_TAG: char = 'T';

/// Replace literal `\n`/`\t` with their marker triples.
///
/// Injective on inputs that do not already contain a marker triple;
/// `escape(s)` never contains a literal newline or tab.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\n' => {
                out.push(MARKER);
                out.push(NEWLINE_TAG);
                out.push(MARKER);
            }
            '\t' => {
                out.push(MARKER);
                out.push(TAB_TAG);
                out.push(MARKER);
            }
            other => out.push(other),
        }
    }
    out
}

/// Replace marker triples back with the control character they represent.
///
/// Idempotent on strings lacking markers; `unescape(escape(s)) == s`.
pub fn unescape(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == MARKER && i + 2 < chars.len() && chars[i + 2] == MARKER {
            match chars[i + 1] {
                NEWLINE_TAG => {
                    out.push('\n');
                    i += 3;
                    continue;
                }
                TAB_TAG => {
                    out.push('\t');
                    i += 3;
                    continue;
                }
                _ => {}
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
