#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod config;
mod report;

pub use config::{Cli, Config, ConfigError};
pub use report::ActionsReporter;

use std::sync::Arc;

use anyhow::Context as _;
use conform_action::{Event, StepSummary};
use conform_git_provider::GitProvider;
use conform_github::GitHubProvider;
use conform_pr::{Checker, Reporter as _, RunOutcome};

/// Check the pull request that triggered the workflow.
///
/// # Errors
///
/// * If the event cannot be read or is not a pull request event
/// * If GitHub cannot be queried with either token
/// * If the pull request does not conform, as [`conform_pr::NonConformant`]
pub async fn run(config: &Config) -> anyhow::Result<RunOutcome> {
    let event = Event::read(config.event_name.as_deref(), config.event_path.as_deref())
        .context("Failed to read event")?
        .into_pull_request()?;

    let provider = GitHubProvider::new()
        .with_token(config.token.clone())
        .with_graphql_token(config.conform_token.clone())
        .with_base_url(config.api_url.clone())
        .with_graphql_url(config.graphql_url.clone());

    let status = provider
        .token_status()
        .await
        .context("Failed to query authenticated user")?;
    log::info!("{status}");

    let status = provider
        .graphql_token_status()
        .await
        .context("Failed to query rate limit")?;
    log::info!("{status}");

    let provider: Arc<dyn GitProvider> = Arc::new(provider);
    log::debug!("Using {} provider", provider.provider_name());

    let checker = Checker::new(provider);
    let outcome = checker
        .run_checks(event.org(), event.author(), event.node_id())
        .await
        .with_context(|| format!("Failed to check {}", event.node_id()))?;

    let mut reporter = ActionsReporter::new(StepSummary::new(config.step_summary.clone()));
    reporter
        .render(&outcome.results)
        .context("Failed to write step summary")?;
    reporter.fail(outcome.is_conformant(), outcome.is_community)?;

    Ok(outcome)
}
