//! Public `Options` surface (spec §6).

use std::path::PathBuf;

/// Policy controlling which external package specifiers are inlined into
/// the bundle versus left external.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolvePolicy {
    /// Inline nothing from `node_modules`; every external specifier is left
    /// external for the consumer to resolve.
    #[default]
    None,
    /// Inline every resolvable `node_modules` specifier.
    All,
    /// Inline only the specifiers named here.
    Allow(Vec<String>),
}

impl ResolvePolicy {
    pub fn should_inline(&self, specifier: &str) -> bool {
        match self {
            ResolvePolicy::None => false,
            ResolvePolicy::All => true,
            ResolvePolicy::Allow(list) => list.iter().any(|s| s == specifier),
        }
    }
}

/// Forwarded verbatim to the bundler's output-naming configuration.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingOptions {
    pub entry_file_names: Option<String>,
    pub chunk_file_names: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub cwd: PathBuf,
    pub preferred_tsconfig: Option<PathBuf>,
    #[serde(default)]
    pub resolve: ResolvePolicy,
    #[serde(default)]
    pub infer_types: bool,
    #[serde(default)]
    pub tsgo: bool,
    #[serde(default)]
    pub splitting: bool,
    #[serde(default)]
    pub minify: bool,
    #[serde(default)]
    pub naming: NamingOptions,
}

impl Options {
    pub fn new(cwd: PathBuf) -> Self {
        Options {
            cwd,
            preferred_tsconfig: None,
            resolve: ResolvePolicy::default(),
            infer_types: false,
            tsgo: false,
            splitting: false,
            minify: false,
            naming: NamingOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_policy_allow_list_matches_named_specifiers_only() {
        let policy = ResolvePolicy::Allow(vec!["lodash".to_string()]);
        assert!(policy.should_inline("lodash"));
        assert!(!policy.should_inline("react"));
    }

    #[test]
    fn resolve_policy_defaults_to_none() {
        assert!(!ResolvePolicy::default().should_inline("anything"));
    }
}
