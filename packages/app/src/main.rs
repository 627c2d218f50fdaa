#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use std::process::ExitCode;

use clap::Parser as _;
use conform_action::WorkflowCommand;
use conform_app::{Cli, Config};
use conform_pr::NonConformant;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = match Config::try_from(Cli::parse()) {
        Ok(config) => conform_app::run(&config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(outcome) => {
            if outcome.results.is_empty() {
                log::info!("No checks were run");
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is::<NonConformant>() => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e:#}");
            WorkflowCommand::Error.issue(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
