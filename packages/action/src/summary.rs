use std::{fs::OpenOptions, io::Write as _, path::PathBuf};

/// Markdown shown on the workflow run page, from `GITHUB_STEP_SUMMARY`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSummary {
    path: Option<PathBuf>,
}

impl StepSummary {
    /// Writes are ignored when `path` is `None`, as when running outside of
    /// Actions.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.filter(|path| !path.as_os_str().is_empty()),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Append `markdown` followed by a newline.
    ///
    /// # Errors
    ///
    /// * If the summary file cannot be opened or written
    pub fn append(&self, markdown: &str) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            log::debug!("No step summary file, skipping");
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{markdown}")
    }
}
