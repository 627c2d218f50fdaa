#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! What a step running inside GitHub Actions reads from and writes to the
//! runner.

pub mod command;
pub mod event;
mod summary;

pub use command::WorkflowCommand;
pub use event::{Account, Event, PullRequestEvent, PushEvent, Repository};
pub use summary::StepSummary;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Required runner variable is missing or empty
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    /// Event payload file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Event payload is not valid for its event name
    #[error("Failed to parse event: {0}")]
    Parse(#[from] serde_json::Error),
    /// Event name with no known payload shape
    #[error("Unhandled event to unmarshal: {0:?}")]
    UnhandledEvent(String),
    /// Known event, but not the one the step expects
    #[error("Unexpected event type: {0}")]
    UnexpectedEvent(&'static str),
}
