use serde_json::{Value, json};

/// Builds the event payloads GitHub Actions writes to `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    owner: String,
    repo: String,
    pr_number: u64,
    node_id: String,
    user_login: String,
    user_id: u64,
    organization: bool,
}

impl EventBuilder {
    #[must_use]
    pub fn new(owner: &str, repo: &str, pr_number: u64) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            pr_number,
            node_id: "PR_kwDOAAABBB".to_string(),
            user_login: "test-user".to_string(),
            user_id: 12345,
            organization: true,
        }
    }

    #[must_use]
    pub fn with_user(mut self, login: &str, id: u64) -> Self {
        self.user_login = login.to_string();
        self.user_id = id;
        self
    }

    #[must_use]
    pub fn with_node_id(mut self, node_id: &str) -> Self {
        self.node_id = node_id.to_string();
        self
    }

    /// Drop the `organization` object, as for repositories owned by a user.
    #[must_use]
    pub const fn without_organization(mut self) -> Self {
        self.organization = false;
        self
    }

    #[must_use]
    pub fn build_pull_request(&self, action: &str) -> Value {
        let mut payload = json!({
            "action": action,
            "number": self.pr_number,
            "pull_request": {
                "node_id": self.node_id,
                "number": self.pr_number,
                "title": "Test Pull Request",
                "state": "open",
                "user": self.build_user(),
            },
            "repository": self.build_repository(),
            "sender": self.build_user(),
        });

        if self.organization {
            payload["organization"] = json!({
                "id": 1,
                "login": self.owner,
            });
        }

        payload
    }

    #[must_use]
    pub fn build_push(&self) -> Value {
        json!({
            "ref": "refs/heads/main",
            "before": "def456abc123",
            "after": "abc123def456",
            "repository": self.build_repository(),
            "sender": self.build_user(),
        })
    }

    fn build_user(&self) -> Value {
        json!({
            "id": self.user_id,
            "login": self.user_login,
            "type": "User",
        })
    }

    fn build_repository(&self) -> Value {
        json!({
            "name": self.repo,
            "owner": {
                "id": 1,
                "login": self.owner,
            },
            "full_name": format!("{}/{}", self.owner, self.repo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_pull_request() {
        let payload = EventBuilder::new("FerretDB", "FerretDB", 123)
            .with_user("octocat", 583_231)
            .with_node_id("PR_kwDOFOO")
            .build_pull_request("opened");

        assert_eq!(payload["action"], "opened");
        assert_eq!(payload["number"], 123);
        assert_eq!(payload["pull_request"]["node_id"], "PR_kwDOFOO");
        assert_eq!(payload["pull_request"]["user"]["login"], "octocat");
        assert_eq!(payload["pull_request"]["user"]["id"], 583_231);
        assert_eq!(payload["organization"]["login"], "FerretDB");
        assert_eq!(payload["repository"]["full_name"], "FerretDB/FerretDB");
    }

    #[test]
    fn test_without_organization() {
        let payload = EventBuilder::new("octocat", "hello-world", 1)
            .without_organization()
            .build_pull_request("synchronize");

        assert!(payload.get("organization").is_none());
        assert_eq!(payload["repository"]["owner"]["login"], "octocat");
    }

    #[test]
    fn test_build_push() {
        let payload = EventBuilder::new("octocat", "hello-world", 1).build_push();

        assert_eq!(payload["ref"], "refs/heads/main");
        assert!(payload.get("pull_request").is_none());
    }
}
