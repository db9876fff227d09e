use std::path::PathBuf;

use dtsroll_cli::args::BuildArgs;
use dtsroll_cli::config::ProjectConfig;
use dtsroll_cli::merge::build_options;

fn build_args() -> BuildArgs {
    BuildArgs {
        entry: vec![PathBuf::from("index.ts")],
        out_dir: None,
        resolve: Some("all".to_string()),
        infer_types: false,
        tsgo: false,
        splitting: false,
        minify: false,
        config: None,
        watch: false,
    }
}

#[test]
fn resolve_flag_overrides_config_default() {
    let config = ProjectConfig::default();
    let options = build_options(PathBuf::from("."), &config, &build_args());
    assert!(options.resolve.should_inline("anything"));
}

#[test]
fn config_loaded_from_disk_round_trips_into_options() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("dtsroll.config.json"),
        r#"{"minify": true, "splitting": true}"#,
    )
    .unwrap();

    let config = dtsroll_cli::config::load(dir.path()).unwrap();
    let mut args = build_args();
    args.resolve = None;
    let options = build_options(dir.path().to_path_buf(), &config, &args);

    assert!(options.minify);
    assert!(options.splitting);
}
