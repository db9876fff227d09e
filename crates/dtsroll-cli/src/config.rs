//! Project configuration loading (spec §4.9): `dtsroll.config.json` or a
//! `package.json#dtsroll` field, tolerant of the comments and trailing
//! commas real `tsconfig.json`-adjacent files carry.

use std::path::{Path, PathBuf};

use dtsroll_core::{NamingOptions, ResolvePolicy};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    pub resolve: Option<ResolvePolicy>,
    pub infer_types: Option<bool>,
    pub tsgo: Option<bool>,
    pub splitting: Option<bool>,
    pub minify: Option<bool>,
    pub naming: Option<NamingOptions>,
    /// Glob patterns used to discover entrypoints when none are given on
    /// the command line.
    pub include: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: json5::Error,
    },
}

/// Loads `dtsroll.config.json` from `cwd` if present, else falls back to
/// `package.json`'s `dtsroll` field, else an empty (all-default) config.
pub fn load(cwd: &Path) -> Result<ProjectConfig, ConfigError> {
    let dedicated = cwd.join("dtsroll.config.json");
    if dedicated.exists() {
        return load_json5_file(&dedicated);
    }

    let package_json = cwd.join("package.json");
    if package_json.exists() {
        let text = std::fs::read_to_string(&package_json).map_err(|source| ConfigError::Read {
            path: package_json.display().to_string(),
            source,
        })?;
        let value: serde_json::Value =
            json5::from_str(&text).map_err(|source| ConfigError::Parse {
                path: package_json.display().to_string(),
                source,
            })?;
        if let Some(section) = value.get("dtsroll") {
            let config: ProjectConfig =
                serde_json::from_value(section.clone()).unwrap_or_default();
            return Ok(config);
        }
    }

    Ok(ProjectConfig::default())
}

fn load_json5_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    json5::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Discover entrypoints from the config's `include` globs, relative to `cwd`.
pub fn discover_entrypoints(cwd: &Path, config: &ProjectConfig) -> Vec<PathBuf> {
    let Some(patterns) = &config.include else {
        return Vec::new();
    };
    let mut builder = globset::GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = globset::Glob::new(pattern) {
            builder.add(glob);
        }
    }
    let Ok(set) = builder.build() else {
        return Vec::new();
    };

    let mut found = Vec::new();
    let walker = walkdir::WalkDir::new(cwd).into_iter().filter_entry(|entry| {
        entry.file_name().to_str() != Some("node_modules")
    });
    for entry in walker.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(cwd).unwrap_or(path);
        if set.is_match(relative) {
            found.push(path.to_path_buf());
        }
    }
    found
}
