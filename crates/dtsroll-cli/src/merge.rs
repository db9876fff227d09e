//! Merge CLI flags over a loaded project config: `None` on the CLI means
//! "inherit from config or default" (spec §4.9).

use dtsroll_core::{NamingOptions, Options, ResolvePolicy};

use crate::args::BuildArgs;
use crate::config::ProjectConfig;

pub fn parse_resolve_policy(raw: &str) -> ResolvePolicy {
    match raw {
        "none" => ResolvePolicy::None,
        "all" => ResolvePolicy::All,
        list => ResolvePolicy::Allow(list.split(',').map(str::trim).map(String::from).collect()),
    }
}

pub fn build_options(cwd: std::path::PathBuf, config: &ProjectConfig, args: &BuildArgs) -> Options {
    let mut options = Options::new(cwd);

    options.resolve = args
        .resolve
        .as_deref()
        .map(parse_resolve_policy)
        .or_else(|| config.resolve.clone())
        .unwrap_or_default();
    options.infer_types = args.infer_types || config.infer_types.unwrap_or(false);
    options.tsgo = args.tsgo || config.tsgo.unwrap_or(false);
    options.splitting = args.splitting || config.splitting.unwrap_or(false);
    options.minify = args.minify || config.minify.unwrap_or(false);
    options.naming = config.naming.clone().unwrap_or_else(NamingOptions::default);

    options
}
