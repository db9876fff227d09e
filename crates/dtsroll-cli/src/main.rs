use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dtsroll_cli::args::{CliArgs, Command};
use dtsroll_cli::{config, merge, reporter, watch};
use dtsroll_core::generate_dts;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dtsroll=info,warn".to_string()),
        )
        .init();

    let args = CliArgs::parse();
    match args.command {
        Command::Build(build) => run_build(build),
        Command::Check(check) => run_check(check),
    }
}

fn run_build(build: dtsroll_cli::args::BuildArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let project_config = config::load(&cwd).context("failed to load project config")?;
    let options = merge::build_options(cwd, &project_config, &build);
    let entrypoints = build.entry.clone();
    let out_dir = build.out_dir.clone().unwrap_or_else(|| PathBuf::from("dist"));

    let generate = || -> Result<()> {
        let outcome = generate_dts(&entrypoints, &options)
            .context("declaration bundling failed")?;

        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;
        for file in &outcome.files {
            let path = out_dir.join(&file.path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &file.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }

        let fatal = outcome.errors.iter().filter(|d| d.is_error()).count();
        reporter::report_diagnostics(&outcome.errors);
        println!("{}", reporter::summary_line(fatal, outcome.files.len()));
        if fatal > 0 {
            bail!("build completed with {fatal} fatal diagnostics");
        }
        Ok(())
    };

    if build.watch {
        watch::watch_and_rerun(&entrypoints, || {
            if let Err(err) = generate() {
                reporter::report_fatal(&err);
            }
        })
        .context("watch mode failed")?;
        return Ok(());
    }

    generate()
}

fn run_check(check: dtsroll_cli::args::CheckArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let project_config = config::load(&cwd).context("failed to load project config")?;
    let build_args = dtsroll_cli::args::BuildArgs {
        entry: check.entry.clone(),
        out_dir: None,
        resolve: None,
        infer_types: false,
        tsgo: false,
        splitting: false,
        minify: false,
        config: check.config.clone(),
        watch: false,
    };
    let options = merge::build_options(cwd, &project_config, &build_args);

    let outcome = generate_dts(&check.entry, &options).context("pipeline check failed")?;
    let fatal = outcome.errors.iter().filter(|d| d.is_error()).count();
    reporter::report_diagnostics(&outcome.errors);
    println!("{}", reporter::summary_line(fatal, outcome.files.len()));
    if fatal > 0 {
        bail!("check found {fatal} fatal diagnostics");
    }
    Ok(())
}
