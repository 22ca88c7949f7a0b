//! StudyGenius command-line client
//!
//! Drives the account, billing and study services against a file-backed
//! session so state carries over between invocations.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use studygenius::config::{LatencyConfig, SessionBackendKind};
use studygenius::utils::logging::init_logging;
use studygenius::{Config, OperationOutcome, StudyGenius, StudyGeniusError};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<StudyGeniusError>() {
                Some(err) if cli.json => {
                    if let Ok(body) = serde_json::to_string_pretty(&OperationOutcome::failed(err)) {
                        println!("{}", body);
                    }
                }
                Some(err) if err.is_user_error() => eprintln!("Error: {}", err.user_message()),
                _ => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli).await?;
    init_logging(&config.logging)?;

    let app = StudyGenius::new(config)
        .await
        .context("Failed to open StudyGenius data")?;
    app.load_state().await?;

    if cli::commands::execute(cli, &app).await? {
        app.save_state().await.context("Failed to save state")?;
    }
    Ok(())
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;

    config.session.backend = if cli.memory {
        SessionBackendKind::Memory
    } else {
        SessionBackendKind::File
    };
    if let Some(dir) = &cli.data_dir {
        config.session.data_dir = dir.clone();
    }
    if cli.fast {
        config.latency = LatencyConfig::zero();
    }

    config.validate()?;
    Ok(config)
}
