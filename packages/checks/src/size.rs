use conform_pr_models::PullRequest;

use crate::{CheckError, SizeEntry};

pub const SIZE_FIELD: &str = "Size";

/// `Size` is set by maintainers once the pull request is merged, so it must
/// be empty on every project.
///
/// # Errors
///
/// * If any project has a non-empty `Size`, listing all of them in project
///   name order
pub fn check(pr: &PullRequest) -> Result<(), CheckError> {
    let entries: Vec<SizeEntry> = pr
        .sorted_projects()
        .into_iter()
        .filter_map(|project| {
            let size = pr.field(project, SIZE_FIELD);
            (!size.is_empty()).then(|| SizeEntry {
                project: project.to_string(),
                size: size.to_string(),
            })
        })
        .collect();

    if entries.is_empty() {
        Ok(())
    } else {
        Err(CheckError::SizeSet(entries))
    }
}

#[cfg(test)]
mod tests {
    use conform_testing::PullRequestBuilder;

    use super::*;

    #[test]
    fn test_no_projects() {
        assert_eq!(check(&PullRequestBuilder::new("Fix bug").build()), Ok(()));
    }

    #[test]
    fn test_all_sizes_empty() {
        let pr = PullRequestBuilder::new("Fix bug")
            .with_project_field("Board", "Size", "")
            .with_project_field("Other", "Status", "Done")
            .build();

        assert_eq!(check(&pr), Ok(()));
    }

    #[test]
    fn test_size_set() {
        let pr = PullRequestBuilder::new("Fix bug")
            .with_project_field("Another test project", "Size", "🐋 X-Large")
            .build();

        assert_eq!(
            check(&pr).unwrap_err().to_string(),
            r#"PR should have "Size" field unset, got "🐋 X-Large" for project "Another test project"."#
        );
    }

    #[test]
    fn test_stable_order_regardless_of_insertion() {
        let forward = PullRequestBuilder::new("Fix bug")
            .with_project_field("Alpha", "Size", "S")
            .with_project_field("Beta", "Size", "M")
            .build();
        let backward = PullRequestBuilder::new("Fix bug")
            .with_project_field("Beta", "Size", "M")
            .with_project_field("Alpha", "Size", "S")
            .build();

        let message = check(&forward).unwrap_err().to_string();

        assert_eq!(message, check(&backward).unwrap_err().to_string());
        assert_eq!(
            message,
            r#"PR should have "Size" field unset, got "S" for project "Alpha", "M" for project "Beta"."#
        );
    }
}
