//! Bundler collaborator (spec §4.6): a Rolldown plugin that hands the
//! forward-transformed fake-JS to the bundler through `resolve_id`/`load`,
//! and captures each output chunk through `generate_bundle` for the driver
//! to reverse-transform afterwards. `run_bundle` drives an actual
//! `rolldown::Bundler` with this plugin registered, so module graph
//! resolution, dead-code elimination and identifier-collision renaming all
//! happen for real rather than being approximated by this crate.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rolldown::{Bundler, BundlerOptions, InputItem, OutputFormat, RawMinifyOptions};
use rolldown_common::{Output, OutputAsset};
use rolldown_plugin::{
    HookLoadArgs, HookLoadOutput, HookLoadReturn, HookNoopReturn, HookResolveIdArgs,
    HookResolveIdOutput, HookResolveIdReturn, Plugin, PluginContext,
};
use rustc_hash::FxHashMap;
use tokio::runtime::Runtime;

use crate::declaration_source::emit_isolated_declaration;
use crate::error::GenerateError;
use crate::options::ResolvePolicy;
use crate::resolver::{DeclarationResolver, ResolvedKind};

/// One bundled chunk's raw text, captured from `generate_bundle`, keyed by
/// its output file name.
#[derive(Debug, Default)]
pub struct BundleOutputs {
    pub chunks: Vec<(String, String)>,
}

pub struct DtsRollPlugin {
    resolver: DeclarationResolver,
    resolve_policy: ResolvePolicy,
    /// Specifier -> already-transformed fake-JS text, built lazily in `load`.
    fake_js_cache: Mutex<FxHashMap<PathBuf, String>>,
    outputs: Mutex<BundleOutputs>,
}

impl DtsRollPlugin {
    pub fn new(cwd: &Path, resolve_policy: ResolvePolicy) -> Self {
        DtsRollPlugin {
            resolver: DeclarationResolver::new(cwd),
            resolve_policy,
            fake_js_cache: Mutex::new(FxHashMap::default()),
            outputs: Mutex::new(BundleOutputs::default()),
        }
    }

    pub fn take_outputs(&self) -> BundleOutputs {
        std::mem::take(&mut self.outputs.lock().unwrap())
    }

    /// First-party source file on disk -> forward-transformed fake JS, going
    /// through isolated-declaration emission first since the file on disk is
    /// ordinary TypeScript, not already a declaration.
    fn forward_transform_file(&self, path: &Path) -> std::io::Result<String> {
        if let Some(cached) = self.fake_js_cache.lock().unwrap().get(path) {
            return Ok(cached.clone());
        }
        let source = std::fs::read_to_string(path)?;
        let source_type = oxc_span::SourceType::from_path(path).unwrap_or_else(|_| oxc_span::SourceType::ts());
        let declaration = emit_isolated_declaration(path, &source, source_type).text;
        let fake_js = dtsroll_forward::forward_transform(&path.display().to_string(), &declaration)
            .unwrap_or_default();
        self.fake_js_cache
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), fake_js.clone());
        Ok(fake_js)
    }

    /// Shipped `.d.ts`/builtin-stub text -> forward-transformed fake JS, with
    /// no isolated-declaration pass since the text is already declaration
    /// syntax (spec §4.11).
    fn forward_transform_declaration_text(&self, id: &str, text: &str) -> String {
        dtsroll_forward::forward_transform(id, text).unwrap_or_default()
    }
}

impl Plugin for DtsRollPlugin {
    fn name(&self) -> std::borrow::Cow<'static, str> {
        "dtsroll".into()
    }

    async fn resolve_id(
        &self,
        _ctx: &PluginContext,
        args: &HookResolveIdArgs<'_>,
    ) -> HookResolveIdReturn {
        let importer_dir = args
            .importer
            .map(|i| Path::new(i).parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        match self.resolver.resolve(&importer_dir, args.specifier) {
            Ok(resolved) => {
                let external = match resolved.kind {
                    // Builtins are synthesized from the stub table and always
                    // inlined; first-party sources always participate in the
                    // graph. Only `node_modules` specifiers are gated by the
                    // configured resolve policy.
                    ResolvedKind::Builtin | ResolvedKind::FirstParty => false,
                    ResolvedKind::NodeModules => !self.resolve_policy.should_inline(args.specifier),
                };
                Ok(Some(HookResolveIdOutput {
                    id: resolved.path.display().to_string(),
                    external: Some(external),
                    ..Default::default()
                }))
            }
            Err(_) => Ok(None),
        }
    }

    async fn load(&self, _ctx: &PluginContext, args: &HookLoadArgs<'_>) -> HookLoadReturn {
        if let Some(specifier) = args.id.strip_prefix("node:") {
            let text = self
                .resolver
                .builtin_declaration_text(&format!("node:{specifier}"))
                .unwrap_or_default();
            return Ok(Some(HookLoadOutput {
                code: self.forward_transform_declaration_text(args.id, text),
                ..Default::default()
            }));
        }

        let path = Path::new(args.id);
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts") | Some("mts") | Some("cts") => {
                let code = self.forward_transform_file(path).unwrap_or_default();
                Ok(Some(HookLoadOutput { code, ..Default::default() }))
            }
            // A resolved `node_modules` dependency's shipped `.d.ts`/`.d.mts`/
            // `.d.cts`: already declaration text, no isolated-declaration pass
            // needed.
            _ => match std::fs::read_to_string(path) {
                Ok(text) => Ok(Some(HookLoadOutput {
                    code: self.forward_transform_declaration_text(args.id, &text),
                    ..Default::default()
                })),
                Err(_) => Ok(None),
            },
        }
    }

    async fn generate_bundle(
        &self,
        _ctx: &PluginContext,
        args: &mut rolldown_plugin::HookGenerateBundleArgs<'_>,
    ) -> HookNoopReturn {
        let mut outputs = self.outputs.lock().unwrap();
        for output in args.bundle.iter() {
            match output {
                Output::Chunk(chunk) => {
                    outputs.chunks.push((chunk.filename.to_string(), chunk.code.clone()));
                }
                Output::Asset(OutputAsset { filename, source, .. }) => {
                    outputs.chunks.push((filename.to_string(), source.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Pre-emit one file's declaration string ahead of bundling (spec §4.6): for
/// files under `node_modules`, skip emission entirely and read the shipped
/// declaration verbatim; for builtins, synthesize from the stub table.
pub fn pre_emit_declaration(resolver: &DeclarationResolver, kind: ResolvedKind, path: &Path) -> std::io::Result<String> {
    match kind {
        ResolvedKind::NodeModules => std::fs::read_to_string(path),
        ResolvedKind::Builtin => {
            let specifier = path.display().to_string();
            Ok(resolver
                .builtin_declaration_text(&specifier)
                .map(str::to_string)
                .unwrap_or_default())
        }
        ResolvedKind::FirstParty => {
            let source = std::fs::read_to_string(path)?;
            let source_type = oxc_span::SourceType::from_path(path).unwrap_or_else(|_| oxc_span::SourceType::ts());
            Ok(emit_isolated_declaration(path, &source, source_type).text)
        }
    }
}

/// Drive a real `rolldown::Bundler` over `entrypoints`, with [`DtsRollPlugin`]
/// registered so module resolution, tree-shaking, code-splitting and
/// identifier-collision renaming run for real. Returns the chunks the
/// plugin's `generate_bundle` hook captured.
pub fn run_bundle(
    entrypoints: &[PathBuf],
    cwd: &Path,
    resolve_policy: ResolvePolicy,
) -> Result<BundleOutputs, GenerateError> {
    let plugin = Arc::new(DtsRollPlugin::new(cwd, resolve_policy));

    let input = entrypoints
        .iter()
        .map(|path| InputItem {
            name: path.file_stem().and_then(|s| s.to_str()).map(str::to_string),
            import: path.display().to_string(),
        })
        .collect();

    let scratch = tempfile::tempdir().map_err(|e| GenerateError::Bundle(e.to_string()))?;

    let bundler_options = BundlerOptions {
        input: Some(input),
        cwd: Some(cwd.to_path_buf()),
        dir: Some(scratch.path().display().to_string()),
        format: Some(OutputFormat::Esm),
        minify: Some(RawMinifyOptions::Bool(false)),
        ..Default::default()
    };

    let mut bundler = Bundler::with_plugins(bundler_options, vec![plugin.clone() as Arc<dyn Plugin>]);

    let runtime = Runtime::new().map_err(|e| GenerateError::Bundle(e.to_string()))?;
    runtime
        .block_on(async { bundler.write().await })
        .map_err(|diagnostics: Vec<rolldown_error::BuildDiagnostic>| {
            GenerateError::Bundle(
                diagnostics
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

    Ok(plugin.take_outputs())
}
