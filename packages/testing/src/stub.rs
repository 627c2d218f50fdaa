use std::sync::{Mutex, PoisonError};

use conform_git_provider::{GitProvider, ProviderError};
use conform_pr_models::{Member, PullRequest};

/// In-memory [`GitProvider`] returning canned data.
///
/// Every call is recorded so tests can assert on what was fetched and in
/// which order. Injected errors are returned once.
#[derive(Debug, Default)]
pub struct StubProvider {
    members: Vec<Member>,
    pull_request: Option<PullRequest>,
    members_error: Mutex<Option<ProviderError>>,
    pull_request_error: Mutex<Option<ProviderError>>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_members(mut self, logins: &[&str]) -> Self {
        self.members = logins.iter().map(|login| Member::new(*login)).collect();
        self
    }

    #[must_use]
    pub fn with_pull_request(mut self, pr: PullRequest) -> Self {
        self.pull_request = Some(pr);
        self
    }

    #[must_use]
    pub fn with_members_error(self, error: ProviderError) -> Self {
        *self
            .members_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    #[must_use]
    pub fn with_pull_request_error(self, error: ProviderError) -> Self {
        *self
            .pull_request_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Calls made so far, as `"<operation> <argument>"`.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait::async_trait]
impl GitProvider for StubProvider {
    async fn list_public_members(&self, org: &str) -> Result<Vec<Member>, ProviderError> {
        self.record(format!("list_public_members {org}"));

        if let Some(error) = self
            .members_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            return Err(error);
        }

        Ok(self.members.clone())
    }

    async fn get_pull_request(&self, node_id: &str) -> Result<PullRequest, ProviderError> {
        self.record(format!("get_pull_request {node_id}"));

        if let Some(error) = self
            .pull_request_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            return Err(error);
        }

        self.pull_request
            .clone()
            .ok_or_else(|| ProviderError::NotFound(node_id.to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_returns_canned_data() {
        let stub = StubProvider::new()
            .with_members(&["alice", "bob"])
            .with_pull_request(PullRequest {
                title: "Fix bug".to_string(),
                ..PullRequest::default()
            });

        let members = stub.list_public_members("FerretDB").await.unwrap();
        let pr = stub.get_pull_request("PR_1").await.unwrap();

        assert_eq!(members, vec![Member::new("alice"), Member::new("bob")]);
        assert_eq!(pr.title, "Fix bug");
        assert_eq!(
            stub.calls(),
            vec!["list_public_members FerretDB", "get_pull_request PR_1"]
        );
    }

    #[tokio::test]
    async fn test_stub_missing_pull_request() {
        let stub = StubProvider::new();

        let err = stub.get_pull_request("PR_404").await.unwrap_err();

        assert!(matches!(err, ProviderError::NotFound(id) if id == "PR_404"));
    }

    #[tokio::test]
    async fn test_stub_error_is_returned_once() {
        let stub = StubProvider::new()
            .with_members_error(ProviderError::Unauthorized("Bad credentials".to_string()));

        assert!(stub.list_public_members("FerretDB").await.is_err());
        assert!(stub.list_public_members("FerretDB").await.is_ok());
    }
}
