//! Leading-comment attachment (spec §4.2 "comment attachment").
//!
//! Comments aren't threaded through the parsed AST: they're recovered
//! textually from the gap between one statement's end and the next one's
//! start, which is exactly the text a leading-comment block occupies. This
//! keeps the helper independent of the parser's own comment/trivia model.

/// Extract the line (`// …`) and block (`/* … */`) comments that sit in
/// `source[prev_end..stmt_start]`, in source order, skipping a gap that is
/// pure whitespace. Stops scanning (and attaches nothing further back) as
/// soon as a line of non-whitespace, non-comment text is seen, since that
/// would belong to a different, unrelated statement.
pub fn leading_comments(source: &str, prev_end: u32, stmt_start: u32) -> Vec<String> {
    let gap = match source.get(prev_end as usize..stmt_start as usize) {
        Some(text) => text,
        None => return Vec::new(),
    };

    let mut comments = Vec::new();
    let bytes = gap.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        match gap[i..].as_bytes() {
            [b'/', b'/', ..] => {
                let end = gap[i..]
                    .find('\n')
                    .map(|n| i + n)
                    .unwrap_or(gap.len());
                comments.push(gap[i..end].trim_end().to_string());
                i = end;
            }
            [b'/', b'*', ..] => {
                if let Some(rel_end) = gap[i + 2..].find("*/") {
                    let end = i + 2 + rel_end + 2;
                    comments.push(gap[i..end].to_string());
                    i = end;
                } else {
                    break;
                }
            }
            _ => {
                let ch = gap[i..].chars().next().unwrap_or(' ');
                if !ch.is_whitespace() {
                    break;
                }
                i += ch.len_utf8();
            }
        }
    }
    comments
}

/// Re-serialise attached comments as leading source text, one per line,
/// ready to prepend to a tokenised statement body.
pub fn serialize_leading_comments(comments: &[String]) -> String {
    if comments.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for comment in comments {
        out.push_str(comment);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_single_line_comment() {
        let source = "// hello\ninterface Foo {}";
        let comments = leading_comments(source, 0, 9);
        assert_eq!(comments, vec!["// hello".to_string()]);
    }

    #[test]
    fn attaches_block_comment() {
        let source = "/** doc */\ninterface Foo {}";
        let comments = leading_comments(source, 0, 11);
        assert_eq!(comments, vec!["/** doc */".to_string()]);
    }

    #[test]
    fn stops_at_unrelated_code() {
        let source = "const x = 1;\n// attached\ninterface Foo {}";
        let stmt_start = source.find("interface").unwrap() as u32;
        let comments = leading_comments(source, 0, stmt_start);
        assert_eq!(comments, vec!["// attached".to_string()]);
    }

    #[test]
    fn serializes_multiple_comments_one_per_line() {
        let rendered = serialize_leading_comments(&["/** a */".to_string(), "// b".to_string()]);
        assert_eq!(rendered, "/** a */\n// b\n");
    }
}
