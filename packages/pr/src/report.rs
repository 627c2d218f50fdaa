//! Presentation of check results.

use std::io::Write;

use conform_checks::{Audience, CheckResult};

const PASSED: &str = "✅";
const FAILED: &str = "❌";

/// Run-level failure, addressed to the author.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NonConformant {
    message: String,
}

impl NonConformant {
    #[must_use]
    pub fn new(audience: Audience) -> Self {
        Self {
            message: audience.reassure(
                "PR does not conform to the project's standards.",
                "maintainers will update it for you",
            ),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Destination of a run's results.
pub trait Reporter {
    /// Write the status table.
    ///
    /// # Errors
    ///
    /// * If the table cannot be written
    fn render(&mut self, results: &[CheckResult]) -> std::io::Result<()>;

    /// Turn the aggregate outcome into the run's verdict.
    ///
    /// # Errors
    ///
    /// * If the pull request is not conformant
    fn fail(&mut self, conformant: bool, is_community: bool) -> Result<(), NonConformant> {
        if conformant {
            return Ok(());
        }

        Err(NonConformant::new(Audience::from_is_community(is_community)))
    }
}

fn status(result: &CheckResult) -> String {
    result
        .error
        .as_ref()
        .map_or_else(|| PASSED.to_string(), |err| format!("{FAILED} {err}"))
}

/// Markdown table of check names and statuses.
///
/// Columns are padded to their widest cell, counted in characters.
#[must_use]
pub fn render_table(results: &[CheckResult]) -> String {
    let rows: Vec<(String, String)> = results
        .iter()
        .map(|result| (result.check.to_string(), status(result)))
        .collect();

    let check_width = rows
        .iter()
        .map(|(check, _)| check.chars().count())
        .chain(std::iter::once("Check".len()))
        .max()
        .unwrap_or_default();
    let status_width = rows
        .iter()
        .map(|(_, status)| status.chars().count())
        .chain(std::iter::once("Status".len()))
        .max()
        .unwrap_or_default();

    let mut table = format!(
        "| {:<check_width$} | {:<status_width$} |\n| {} | {} |\n",
        "Check",
        "Status",
        "-".repeat(check_width),
        "-".repeat(status_width),
    );

    for (check, status) in rows {
        table.push_str(&format!(
            "| {check:<check_width$} | {status:<status_width$} |\n"
        ));
    }

    table
}

/// Writes the table to any [`Write`]r.
pub struct TableReporter<W: Write> {
    writer: W,
}

impl<W: Write> TableReporter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for TableReporter<W> {
    fn render(&mut self, results: &[CheckResult]) -> std::io::Result<()> {
        self.writer.write_all(render_table(results).as_bytes())?;
        self.writer.flush()
    }
}
