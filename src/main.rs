use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::{error, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use git_remind::github::GitHubRepository;
use git_remind::hipchat::HipChatReminder;
use git_remind::RemindError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_REMOTE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "git-remind")]
#[command(about = "Remind a HipChat room about open GitHub pull requests", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = git_remind::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &RemindError) -> i32 {
    match err {
        RemindError::Configuration(_) => EXIT_CONFIG,
        RemindError::Network { .. } => EXIT_NETWORK,
        RemindError::RemoteProtocol { .. } => EXIT_REMOTE,
    }
}

fn fail(err: RemindError) -> ! {
    error!("{}", err);
    std::process::exit(exit_code(&err));
}

#[tokio::main]
async fn main() {
    git_remind::tls::install_crypto_provider();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.config.as_os_str().is_empty() {
        let _ = Cli::command().print_help();
        std::process::exit(EXIT_CONFIG);
    }

    let config = match git_remind::config::load_config(Some(cli.config)) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if config.github.repositories.is_empty() {
        warn!("No repositories configured; nothing to remind about");
    }

    // Both are validated before any request goes out
    let repository = GitHubRepository::new(config.github_settings()).unwrap_or_else(|e| fail(e));
    let reminder = HipChatReminder::new(config.hipchat_settings()).unwrap_or_else(|e| fail(e));

    if let Err(e) = git_remind::run(&repository, &reminder).await {
        fail(e);
    }

    std::process::exit(EXIT_SUCCESS);
}
