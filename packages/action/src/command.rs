//! Workflow commands: `::name::message` lines the runner picks up from
//! standard output.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WorkflowCommand {
    Debug,
    Notice,
    Warning,
    Error,
}

impl WorkflowCommand {
    /// The command line for `message`.
    #[must_use]
    pub fn format(self, message: &str) -> String {
        format!("::{self}::{}", escape_data(message))
    }

    /// Print the command to standard output.
    pub fn issue(self, message: &str) {
        println!("{}", self.format(message));
    }
}

/// Escape `message` so that it stays on one command line.
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
