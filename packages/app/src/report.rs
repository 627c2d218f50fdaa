use conform_action::{StepSummary, WorkflowCommand};
use conform_checks::{Audience, CheckResult};
use conform_pr::{NonConformant, Reporter, render_table};

/// Reports to the workflow run: the table goes to the step summary and the
/// log, the verdict to an `::error::` command.
pub struct ActionsReporter {
    summary: StepSummary,
}

impl ActionsReporter {
    #[must_use]
    pub const fn new(summary: StepSummary) -> Self {
        Self { summary }
    }
}

impl Reporter for ActionsReporter {
    fn render(&mut self, results: &[CheckResult]) -> std::io::Result<()> {
        let table = render_table(results);
        self.summary.append(&table)?;
        log::info!("\n{table}");
        Ok(())
    }

    fn fail(&mut self, conformant: bool, is_community: bool) -> Result<(), NonConformant> {
        if conformant {
            return Ok(());
        }

        let err = NonConformant::new(Audience::from_is_community(is_community));
        WorkflowCommand::Error.issue(err.message());
        Err(err)
    }
}
