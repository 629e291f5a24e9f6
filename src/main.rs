use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use quickloan_aa::app::{App, Screen};
use quickloan_aa::config::AppConfig;
use quickloan_aa::{logging, Result};

/// Terminal prototype of an Account Aggregator consent flow
#[derive(Parser, Debug)]
#[command(name = "quickloan", version, about)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to start on, e.g. HOME, AA_LOGIN, TRUST_CENTER
    #[arg(short, long, default_value = "HOME")]
    screen: String,

    /// Log level (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file (defaults to the user data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let log_path = match args.log_file {
        Some(path) => path,
        None => logging::default_log_path()?,
    };
    logging::init(level, &log_path)?;

    let start = Screen::parse_or_home(&args.screen);
    info!("Starting quickloan on {}", start);

    let mut app = App::new(&config, start)?;
    // A half-finished init still needs raw mode undone
    let outcome = match app.init() {
        Ok(()) => app.run().await,
        Err(e) => Err(e),
    };
    let restored = app.restore();

    if let Err(e) = &outcome {
        error!("Exited with error: {}", e);
    }
    outcome.and(restored)
}
