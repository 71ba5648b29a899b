// src/bin/cli.rs

//! pdrules CLI
//!
//! Interactive entry point: asks for an API key, a user scope and the rules
//! to apply, then updates every selected user.

use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use pdrules::{
    api::{ApiToken, RestClient},
    error::{AppError, Result},
    models::Config,
    pipeline,
    prompt::{LinePrompt, Prompt, TerminalPrompt, is_interactive_terminal},
    utils::log as progress,
};

/// pdrules - PagerDuty bulk notification rule updater
#[derive(Parser, Debug)]
#[command(name = "pdrules", version, about = "PagerDuty Bulk Notification Rule Updater")]
struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "pdrules.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging. `RUST_LOG` still overrides `level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

async fn run(config: &Config, prompt: &mut dyn Prompt) -> Result<()> {
    progress::header("PagerDuty Bulk Notification Rule Updater");

    let token = ApiToken::new(prompt.password("Enter your PagerDuty API key")?);
    if token.is_empty() {
        return Err(AppError::config("No API key entered"));
    }
    let client = RestClient::new(&config.api, token)?;

    pipeline::run_session(config, &client, prompt).await?;
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Read the file before the logger exists; report a bad file once it does.
    let loaded = Config::load_if_present(&cli.config);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => Config::default(),
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level);
    progress::init(level);

    match loaded {
        Ok(Some(_)) => log::debug!("Loaded config from {:?}", cli.config),
        Ok(None) => log::debug!("No config file at {:?}, using defaults", cli.config),
        Err(e) => log::warn!(
            "Config load failed from {:?}: {}. Using defaults.",
            cli.config,
            e
        ),
    }

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    if is_interactive_terminal() {
        run(&config, &mut TerminalPrompt).await
    } else {
        log::debug!("stdin is not a terminal, reading answers line by line");
        let mut prompt = LinePrompt::new(BufReader::new(io::stdin()), io::stdout());
        run(&config, &mut prompt).await
    }
}
