//! CLI argument surface (spec §6 CLI additions).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dtsroll", version, about = "Bundle TypeScript declaration files")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate bundled declaration files for one or more entrypoints.
    Build(BuildArgs),
    /// Run the pipeline and report diagnostics without writing output.
    Check(CheckArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Entry point files to bundle declarations for.
    #[arg(value_name = "FILE", required = true)]
    pub entry: Vec<PathBuf>,

    /// Output directory for generated declaration files.
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// node_modules inline policy: "none", "all", or a comma-separated allow-list.
    #[arg(long)]
    pub resolve: Option<String>,

    /// Use a whole-program type checker to pre-emit declarations.
    #[arg(long = "infer-types")]
    pub infer_types: bool,

    /// Prefer the tsgo checker binary when inferring types.
    #[arg(long)]
    pub tsgo: bool,

    /// Emit one chunk per entrypoint instead of a single bundle.
    #[arg(long)]
    pub splitting: bool,

    /// Minify the final declaration output.
    #[arg(long)]
    pub minify: bool,

    /// Path to a project config file, overriding auto-discovery.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Re-run generation whenever a resolved input file changes.
    #[arg(short = 'w', long)]
    pub watch: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Entry point files to run the pipeline against.
    #[arg(value_name = "FILE", required = true)]
    pub entry: Vec<PathBuf>,

    /// Path to a project config file, overriding auto-discovery.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
