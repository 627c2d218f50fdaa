use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "conform-pr")]
#[command(about = "Check that a pull request conforms to the project's standards", long_about = None)]
pub struct Cli {
    /// Name of the event that triggered the workflow
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path of the event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Markdown file shown on the workflow run page
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub step_summary: Option<PathBuf>,

    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    #[arg(
        long,
        env = "GITHUB_GRAPHQL_URL",
        default_value = "https://api.github.com/graphql"
    )]
    pub graphql_url: String,

    /// Token for the REST API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Token for the GraphQL API; needs read access to projects
    #[arg(long, env = "CONFORM_TOKEN", hide_env_values = true)]
    pub conform_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Token missing or empty
    #[error("{0} is not set.")]
    MissingToken(&'static str),
}

/// Validated [`Cli`].
#[derive(Debug, Clone)]
pub struct Config {
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
    pub step_summary: Option<PathBuf>,
    pub api_url: String,
    pub graphql_url: String,
    pub token: String,
    pub conform_token: String,
}

fn required(value: Option<String>, var: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingToken(var))
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            token: required(cli.token, "GITHUB_TOKEN")?,
            conform_token: required(cli.conform_token, "CONFORM_TOKEN")?,
            event_name: cli.event_name,
            event_path: cli.event_path,
            step_summary: cli.step_summary,
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            graphql_url: cli.graphql_url,
        })
    }
}
