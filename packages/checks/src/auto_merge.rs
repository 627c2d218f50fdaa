use conform_pr_models::PullRequest;

use crate::{Audience, CheckError};

/// # Errors
///
/// * If the pull request is open and auto-merge is not enabled
pub fn check(pr: &PullRequest, audience: Audience) -> Result<(), CheckError> {
    if pr.closed || pr.auto_merge_enabled {
        return Ok(());
    }

    Err(CheckError::AutoMergeDisabled(audience))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled() {
        let pr = PullRequest {
            auto_merge_enabled: true,
            ..PullRequest::default()
        };

        assert_eq!(check(&pr, Audience::Community), Ok(()));
    }

    #[test]
    fn test_closed_without_auto_merge() {
        let pr = PullRequest {
            closed: true,
            ..PullRequest::default()
        };

        assert_eq!(check(&pr, Audience::Member), Ok(()));
    }

    #[test]
    fn test_disabled() {
        let pr = PullRequest::default();

        assert_eq!(
            check(&pr, Audience::Member).unwrap_err().to_string(),
            "PR should have auto-merge enabled."
        );
        assert_eq!(
            check(&pr, Audience::Community).unwrap_err().to_string(),
            "PR should have auto-merge enabled. Don't worry, maintainers will enable it for you."
        );
    }
}
