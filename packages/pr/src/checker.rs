use std::sync::Arc;

use conform_checks::{Audience, CheckResult};
use conform_git_provider::{GitProvider, ProviderError};

/// Result of one conformance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// One result per rule, in rule order. Empty when the checks were skipped.
    pub results: Vec<CheckResult>,
    pub is_community: bool,
}

impl RunOutcome {
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        self.results.iter().all(CheckResult::passed)
    }

    #[must_use]
    pub const fn audience(&self) -> Audience {
        Audience::from_is_community(self.is_community)
    }
}

pub struct Checker {
    provider: Arc<dyn GitProvider>,
}

impl Checker {
    #[must_use]
    pub fn new(provider: Arc<dyn GitProvider>) -> Self {
        Self { provider }
    }

    /// Whether `user` is not a public member of `org`.
    ///
    /// # Errors
    ///
    /// * If the members cannot be listed
    pub async fn is_community(&self, org: &str, user: &str) -> Result<bool, ProviderError> {
        let members = self.provider.list_public_members(org).await?;
        log::debug!("{} public members in {org}", members.len());

        Ok(!members.iter().any(|member| member.login == user))
    }

    /// Fetch the pull request and run every rule against it.
    ///
    /// Pull requests opened by Dependabot are not checked and yield no
    /// results.
    ///
    /// # Errors
    ///
    /// * If the members cannot be listed
    /// * If the pull request cannot be fetched
    pub async fn run_checks(
        &self,
        org: &str,
        user: &str,
        node_id: &str,
    ) -> Result<RunOutcome, ProviderError> {
        let is_community = self.is_community(org, user).await?;
        log::info!("Community: {is_community}");

        let pr = self.provider.get_pull_request(node_id).await?;
        log::debug!("{pr:#?}");

        if pr.is_dependabot() {
            log::info!("Skipping checks for a PR opened by {}", pr.author);
            return Ok(RunOutcome {
                results: Vec::new(),
                is_community,
            });
        }

        let results = conform_checks::run_all(&pr, Audience::from_is_community(is_community));

        Ok(RunOutcome {
            results,
            is_community,
        })
    }
}

#[cfg(test)]
mod tests {
    use conform_checks::{CheckError, CheckName};
    use conform_testing::{PullRequestBuilder, StubProvider};

    use super::*;

    fn checker(stub: StubProvider) -> (Checker, Arc<StubProvider>) {
        let stub = Arc::new(stub);
        (Checker::new(stub.clone()), stub)
    }

    fn end_to_end_pr() -> PullRequestBuilder {
        PullRequestBuilder::new("Fix sorting for null values")
            .with_author("octocat", false)
            .with_body("Fixes a regression introduced in v1.2.")
            .with_auto_merge(true)
            .with_project_field("Board", "Size", "")
            .with_iteration("Board", "Sprint", "Sprint 7", "2024-03-11", 14)
            .with_project_field("Another test project", "Size", "")
    }

    #[test_log::test(tokio::test)]
    async fn test_end_to_end_conformant() {
        let (checker, stub) = checker(
            StubProvider::new()
                .with_members(&["octocat"])
                .with_pull_request(end_to_end_pr().build()),
        );

        let outcome = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap();

        assert_eq!(outcome.results.len(), 6);
        assert!(outcome.is_conformant());
        assert!(!outcome.is_community);
        assert_eq!(
            stub.calls(),
            vec!["list_public_members FerretDB", "get_pull_request PR_1"]
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_community_author() {
        let pr = end_to_end_pr().with_auto_merge(false).build();
        let (checker, _) = checker(
            StubProvider::new()
                .with_members(&["alice"])
                .with_pull_request(pr),
        );

        let outcome = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap();

        assert!(outcome.is_community);
        assert_eq!(outcome.audience(), Audience::Community);
        assert!(!outcome.is_conformant());
        assert_eq!(
            outcome.results[5],
            CheckResult::new(
                CheckName::AutoMerge,
                Some(CheckError::AutoMergeDisabled(Audience::Community))
            )
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_dependabot_is_skipped() {
        let pr = PullRequestBuilder::new("bump deps.")
            .with_author("dependabot", true)
            .with_labels(&["do not merge"])
            .build();
        let (checker, _) = checker(StubProvider::new().with_pull_request(pr));

        let outcome = checker.run_checks("FerretDB", "dependabot", "PR_1").await.unwrap();

        assert!(outcome.results.is_empty());
        assert!(outcome.is_conformant());
    }

    #[test_log::test(tokio::test)]
    async fn test_user_named_dependabot_is_checked() {
        let pr = PullRequestBuilder::new("bump deps.")
            .with_author("dependabot", false)
            .build();
        let (checker, _) = checker(StubProvider::new().with_pull_request(pr));

        let outcome = checker.run_checks("FerretDB", "dependabot", "PR_1").await.unwrap();

        assert_eq!(outcome.results.len(), 6);
        assert!(!outcome.is_conformant());
    }

    #[test_log::test(tokio::test)]
    async fn test_member_listing_failure_is_fatal() {
        let (checker, stub) = checker(
            StubProvider::new()
                .with_members_error(ProviderError::Unauthorized("Bad credentials".to_string()))
                .with_pull_request(end_to_end_pr().build()),
        );

        let err = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap_err();

        assert!(matches!(err, ProviderError::Unauthorized(_)));
        assert_eq!(stub.calls(), vec!["list_public_members FerretDB"]);
    }

    #[test_log::test(tokio::test)]
    async fn test_pull_request_failure_is_fatal() {
        let (checker, _) = checker(StubProvider::new().with_members(&["octocat"]));

        let err = checker.run_checks("FerretDB", "octocat", "PR_404").await.unwrap_err();

        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[test_log::test(tokio::test)]
    async fn test_truncated_pull_request_is_fatal() {
        let (checker, stub) = checker(
            StubProvider::new()
                .with_members(&["octocat"])
                .with_pull_request(end_to_end_pr().build())
                .with_pull_request_error(ProviderError::TooManyNodes("Labels")),
        );

        let err = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap_err();

        assert_eq!(err.to_string(), "Too many Labels nodes");
        assert_eq!(
            stub.calls(),
            vec!["list_public_members FerretDB", "get_pull_request PR_1"]
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_closed_pull_request_needs_no_auto_merge() {
        let pr = end_to_end_pr().with_auto_merge(false).with_closed(true).build();
        let (checker, _) = checker(
            StubProvider::new()
                .with_members(&["alice"])
                .with_pull_request(pr),
        );

        let outcome = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap();

        assert_eq!(outcome.audience(), Audience::Community);
        assert!(outcome.is_conformant());
    }

    #[test_log::test(tokio::test)]
    async fn test_same_snapshot_same_results() {
        let pr = end_to_end_pr().with_labels(&["fuzz"]).build();
        let (checker, _) = checker(
            StubProvider::new()
                .with_members(&["octocat"])
                .with_pull_request(pr),
        );

        let first = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap();
        let second = checker.run_checks("FerretDB", "octocat", "PR_1").await.unwrap();

        assert_eq!(first, second);
    }
}
