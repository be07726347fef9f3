use clap::Parser;
use directories::ProjectDirs;
use repz::api::RepzApi;
use repz::config::RepzConfig;
use repz::error::Result;
use repz::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod cli;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(&cli);
    let config = RepzConfig::ensure(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone()).with_file_ext(config.get_file_ext());
    let mut api = RepzApi::new(store, &config.default_dataset)?;

    if let Some(name) = &cli.file {
        api.open(name)?;
    }

    if cli.commands.is_empty() {
        cli::repl::run(&mut api, Some(data_dir.join("history")))
    } else {
        cli::run_commands(&mut api, &cli.commands)
    }
}

/// The data directory holds the datasets, config.json and the REPL history.
/// Resolution order: --data-dir flag, REPZ_HOME env var, the platform data
/// dir, then ./.repz as a last resort.
fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("REPZ_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    match ProjectDirs::from("com", "repz", "repz") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".repz"),
    }
}
