use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234" for dev builds
pub fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "repz", bin_name = "repz", version = get_version())]
#[command(about = "A small, file-backed workout log for the command line", long_about = None)]
pub struct Cli {
    /// Directory holding datasets and config (default: platform data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Dataset to open at startup instead of the configured default
    #[arg(short, long, value_name = "NAME")]
    pub file: Option<String>,

    /// Run one command line and exit (repeatable, runs in order)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,
}
