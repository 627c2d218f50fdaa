use conform_pr_models::PullRequest;

use crate::{Audience, CheckError};

pub const SPRINT_FIELD: &str = "Sprint";
pub const SPRINT_IS_CURRENT_FIELD: &str = "Sprint/IsCurrent";

/// At least one project must have a `Sprint`.
///
/// A sprint that is not the current iteration is only logged.
///
/// # Errors
///
/// * If no project has a non-empty `Sprint`
pub fn check(pr: &PullRequest, audience: Audience) -> Result<(), CheckError> {
    for project in pr.sorted_projects() {
        let sprint = pr.field(project, SPRINT_FIELD);
        if sprint.is_empty() {
            continue;
        }

        if pr.field(project, SPRINT_IS_CURRENT_FIELD) == "false" {
            log::warn!("Sprint {sprint:?} of project {project:?} is not the current one");
        }

        return Ok(());
    }

    Err(CheckError::SprintUnset(audience))
}
