use conform_pr_models::{Member, PullRequest};

use crate::ProviderError;

/// Source of the data a conformance run needs.
///
/// Implementations are constructed once with their credentials and handed to
/// the checker; the checker never builds one itself.
#[async_trait::async_trait]
pub trait GitProvider: Send + Sync {
    /// List the public members of `org`.
    ///
    /// # Errors
    ///
    /// Returns an error if the members cannot be listed.
    async fn list_public_members(&self, org: &str) -> Result<Vec<Member>, ProviderError>;

    /// Fetch the snapshot of the pull request with the given opaque node id.
    ///
    /// # Errors
    ///
    /// Returns an error if the pull request cannot be fetched or decoded.
    async fn get_pull_request(&self, node_id: &str) -> Result<PullRequest, ProviderError>;

    fn provider_name(&self) -> &'static str;
}
