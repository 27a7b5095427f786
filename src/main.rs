use clap::Parser;
use som_fetch::error::exit_code;
use som_fetch::install::{InstallOptions, install};
use std::path::PathBuf;

/// som-fetch - fetch prebuilt stake-o-matic binaries
///
/// Downloads solana-stake-o-matic and registry-cli for this platform into the
/// current directory, marks them executable and runs each with --version.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
///
/// Examples:
///   som-fetch            # Latest release (or master build if MASTER is set)
///   som-fetch master     # Latest master-branch build
///   som-fetch v1.2.3     # A specific release tag
#[derive(Parser, Debug)]
#[command(author, version = env!("SOM_FETCH_VERSION"), about)]
struct Cli {
    /// Release tag to fetch, or "master" for the latest master-branch build
    #[arg(id = "release", value_name = "VERSION")]
    pub release: Option<String>,

    /// Fetch the master build when no VERSION is given. Setting MASTER to
    /// any non-empty value does the same.
    #[arg(
        long,
        env = "MASTER",
        value_name = "ANY",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "1",
        hide_env_values = true
    )]
    pub master: Option<String>,

    /// Repository base URL (defaults to the upstream GitHub repository)
    #[arg(long = "repo-url", env = "SOM_FETCH_REPO_URL", value_name = "URL")]
    pub repo_url: Option<String>,

    /// Directory to write the binaries into (defaults to the current directory)
    #[arg(long = "dir", short = 'd', value_name = "PATH")]
    pub install_dir: Option<PathBuf>,
}

impl From<Cli> for InstallOptions {
    fn from(cli: Cli) -> Self {
        InstallOptions {
            version: cli.release,
            prefer_master: cli.master.is_some_and(|value| !value.is_empty()),
            repo_url: cli.repo_url,
            install_dir: cli.install_dir,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = som_fetch::runtime::RealRuntime;

    if let Err(err) = install(runtime, cli.into()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}
