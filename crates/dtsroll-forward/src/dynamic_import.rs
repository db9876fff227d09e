//! Dynamic type-import expander (spec §4.4.1).
//!
//! Rewrites `import('M')`, `import('M').p`, `import('M').a.b['c']` into one
//! or two static imports plus (when the access chain is more than one step,
//! or not identifier-shaped) an aliased local variable.

use dtsroll_ast::regex_rules::WORD;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

use crate::error::ForwardError;

static DYNAMIC_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"import\(\s*(?P<q>['"])(?P<module>[^'"]*)(?P=q)\s*\)(?P<access>(?:\.[A-Za-z_$][A-Za-z0-9_$]*|\[(?:'[^']*'|"[^"]*")\])*)"#,
    )
    .unwrap()
});

/// A single dotted or bracketed access step, textually captured.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AccessStep {
    key: String,
    /// Whether the source wrote `.key` as a dotted identifier access.
    was_dotted: bool,
}

/// Result of recognising a dynamic-import expression: statements to splice
/// in ahead of the current one, and the identifier token to use in its place.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub pre_statements: Vec<String>,
    pub identifier: String,
}

/// Find the first dynamic-import expression in `text`, returning its full
/// match range alongside the parsed module specifier and access chain.
pub fn find(text: &str) -> Option<(std::ops::Range<usize>, String, Vec<AccessStepPublic>)> {
    let caps = DYNAMIC_IMPORT.captures(text)?;
    let whole = caps.get(0).unwrap();
    let module = caps["module"].to_string();
    let access = parse_access_chain(&caps["access"]);
    Some((whole.range(), module, access.into_iter().map(Into::into).collect()))
}

/// Public view of an access step, used by callers that only need to detect
/// presence (the expander itself re-parses internally).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessStepPublic {
    pub key: String,
    pub was_dotted: bool,
}

impl From<AccessStep> for AccessStepPublic {
    fn from(s: AccessStep) -> Self {
        AccessStepPublic {
            key: s.key,
            was_dotted: s.was_dotted,
        }
    }
}

fn parse_access_chain(raw: &str) -> Vec<AccessStep> {
    static ACCESS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"\.(?P<dot>[A-Za-z_$][A-Za-z0-9_$]*)|\[(?:'(?P<sq>[^']*)'|"(?P<dq>[^"]*)")\]"#).unwrap()
    });
    ACCESS
        .captures_iter(raw)
        .map(|caps| {
            if let Some(name) = caps.name("dot") {
                AccessStep {
                    key: name.as_str().to_string(),
                    was_dotted: true,
                }
            } else if let Some(s) = caps.name("sq").or_else(|| caps.name("dq")) {
                AccessStep {
                    key: s.as_str().to_string(),
                    was_dotted: false,
                }
            } else {
                unreachable!("regex only has dot/sq/dq alternatives")
            }
        })
        .collect()
}

fn is_identifier(s: &str) -> bool {
    WORD.is_match(s)
}

fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, ch) in s.chars().enumerate() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            out.push(ch);
        } else {
            out.push('_');
        }
        if i == 0 && ch.is_ascii_digit() {
            out.insert(0, '_');
        }
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}

fn render_access(steps: &[AccessStep]) -> String {
    let mut out = String::new();
    for step in steps {
        if step.was_dotted {
            out.push('.');
            out.push_str(&step.key);
        } else {
            out.push_str("['");
            out.push_str(&step.key);
            out.push_str("']");
        }
    }
    out
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap()
}

fn content_hash(module: &str, property: &str) -> String {
    let mut hasher = FxHasher::default();
    module.hash(&mut hasher);
    property.hash(&mut hasher);
    base36(hasher.finish())
}

/// Assigns stable, content-hashed identifier suffixes, falling back to a
/// process-local monotonic counter only when a specifier/property pair is
/// otherwise ambiguous (never observed in practice, since the hash already
/// disambiguates by key — kept to satisfy the spec's documented fallback).
#[derive(Debug, Default)]
pub struct DynamicImportExpander {
    seen: FxHashMap<(String, String), String>,
    fallback_counter: u32,
}

impl DynamicImportExpander {
    pub fn new() -> Self {
        Self::default()
    }

    fn alias_for(&mut self, module: &str, property: &str) -> String {
        let key = (module.to_string(), property.to_string());
        if let Some(existing) = self.seen.get(&key) {
            return existing.clone();
        }
        let suffix = content_hash(module, property);
        let alias = format!("{}_{}", sanitize(property), suffix);
        self.seen.insert(key, alias.clone());
        alias
    }

    fn random_alias(&mut self, seed: &str) -> String {
        self.fallback_counter += 1;
        format!("{}_{}", sanitize(seed), base36(self.fallback_counter as u64))
    }

    /// Expand one dynamic-import surface into the statements it injects and
    /// the identifier token that replaces it inline.
    pub fn expand(
        &mut self,
        file: &str,
        module: &str,
        access: &[AccessStepPublic],
    ) -> Result<Expansion, ForwardError> {
        let steps: Vec<AccessStep> = access
            .iter()
            .map(|a| AccessStep {
                key: a.key.clone(),
                was_dotted: a.was_dotted,
            })
            .collect();

        if steps.is_empty() {
            let ns_local = self.alias_for(module, "");
            let ns_local = format!("NS_{ns_local}");
            return Ok(Expansion {
                pre_statements: vec![format!("import * as {ns_local} from '{module}';")],
                identifier: ns_local,
            });
        }

        let first = &steps[0];
        if !is_identifier(&first.key) {
            if first.was_dotted {
                return Err(ForwardError::InvalidDynamicImport {
                    file: file.to_string(),
                    surface: format!("import('{module}'){}", render_access(&steps)),
                });
            }
            let ns_local = format!("NS_{}", self.alias_for(module, ""));
            let var_local = self.random_alias(&first.key);
            let chain = render_access(&steps);
            return Ok(Expansion {
                pre_statements: vec![
                    format!("import * as {ns_local} from '{module}';"),
                    format!("var {var_local} = {ns_local}{chain};"),
                ],
                identifier: var_local,
            });
        }

        let named_local = self.alias_for(module, &first.key);
        let import_stmt = format!("import {{ {} as {named_local} }} from '{module}';", first.key);

        if steps.len() == 1 {
            return Ok(Expansion {
                pre_statements: vec![import_stmt],
                identifier: named_local,
            });
        }

        let rest = render_access(&steps[1..]);
        let var_local = self.alias_for(module, &format!("{}{rest}", first.key));
        Ok(Expansion {
            pre_statements: vec![
                import_stmt,
                format!("var {var_local} = {named_local}{rest};"),
            ],
            identifier: var_local,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_bare_dynamic_import() {
        let (range, module, access) = find("import('./m')").unwrap();
        assert_eq!(module, "./m");
        assert!(access.is_empty());
        assert_eq!(&"import('./m')"[range], "import('./m')");
    }

    #[test]
    fn finds_dotted_access_chain() {
        let (_, module, access) = find("import('./m').User").unwrap();
        assert_eq!(module, "./m");
        assert_eq!(access, vec![AccessStepPublic { key: "User".into(), was_dotted: true }]);
    }

    #[test]
    fn expands_no_access_to_namespace_import() {
        let mut expander = DynamicImportExpander::new();
        let expansion = expander.expand("f.d.ts", "node:buffer", &[]).unwrap();
        assert_eq!(expansion.pre_statements.len(), 1);
        assert!(expansion.pre_statements[0].starts_with("import * as NS_"));
    }

    #[test]
    fn expands_named_access_to_named_import() {
        let mut expander = DynamicImportExpander::new();
        let access = vec![AccessStepPublic { key: "Buffer".into(), was_dotted: true }];
        let expansion = expander.expand("f.d.ts", "node:buffer", &access).unwrap();
        assert_eq!(expansion.pre_statements.len(), 1);
        assert!(expansion.pre_statements[0].contains("Buffer as Buffer_"));
        assert!(expansion.identifier.starts_with("Buffer_"));
    }

    #[test]
    fn same_module_and_property_reuse_the_same_alias() {
        let mut expander = DynamicImportExpander::new();
        let access = vec![AccessStepPublic { key: "User".into(), was_dotted: true }];
        let first = expander.expand("f.d.ts", "./m", &access).unwrap();
        let second = expander.expand("f.d.ts", "./m", &access).unwrap();
        assert_eq!(first.identifier, second.identifier);
    }

    #[test]
    fn further_access_after_named_import_synthesises_a_variable() {
        let mut expander = DynamicImportExpander::new();
        let access = vec![
            AccessStepPublic { key: "a".into(), was_dotted: true },
            AccessStepPublic { key: "b".into(), was_dotted: true },
        ];
        let expansion = expander.expand("f.d.ts", "./m", &access).unwrap();
        assert_eq!(expansion.pre_statements.len(), 2);
        assert!(expansion.pre_statements[1].contains(".b;"));
    }
}
