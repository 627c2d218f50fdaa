//! Payloads of the events that trigger a workflow.

use std::path::Path;

use serde::Deserialize;

use crate::ActionError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// Opaque GraphQL id.
    pub node_id: String,
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub user: Account,
}

/// `pull_request` and `pull_request_target` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub action: String,
    pub pull_request: PullRequest,
    pub repository: Repository,
    /// Absent for repositories owned by a user.
    pub organization: Option<Account>,
}

impl PullRequestEvent {
    /// Login of the organization, or of the user owning the repository.
    #[must_use]
    pub fn org(&self) -> &str {
        self.organization
            .as_ref()
            .map_or(&self.repository.owner.login, |org| &org.login)
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.pull_request.user.login
    }

    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.pull_request.node_id
    }
}

/// `push` and `schedule` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub ref_name: Option<String>,
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PullRequest(Box<PullRequestEvent>),
    Push(PushEvent),
}

impl Event {
    /// Read the payload the runner wrote for this workflow run.
    ///
    /// # Errors
    ///
    /// * If the event name or path is missing
    /// * If the payload cannot be read or parsed
    /// * If the event name has no known payload shape
    pub fn read(event_name: Option<&str>, event_path: Option<&Path>) -> Result<Self, ActionError> {
        let event_path = event_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ActionError::MissingEnv("GITHUB_EVENT_PATH"))?;

        let body = std::fs::read(event_path).map_err(|source| ActionError::Read {
            path: event_path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Read event from {}:\n{}",
            event_path.display(),
            String::from_utf8_lossy(&body)
        );

        let event_name = event_name
            .filter(|name| !name.is_empty())
            .ok_or(ActionError::MissingEnv("GITHUB_EVENT_NAME"))?;

        Self::parse(event_name, &body)
    }

    /// # Errors
    ///
    /// * If the event name has no known payload shape
    /// * If the payload does not match it
    pub fn parse(event_name: &str, body: &[u8]) -> Result<Self, ActionError> {
        match event_name {
            "pull_request" | "pull_request_target" => {
                Ok(Self::PullRequest(Box::new(serde_json::from_slice(body)?)))
            }
            "push" | "schedule" => Ok(Self::Push(serde_json::from_slice(body)?)),
            _ => Err(ActionError::UnhandledEvent(event_name.to_string())),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PullRequest(_) => "PullRequestEvent",
            Self::Push(_) => "PushEvent",
        }
    }

    /// # Errors
    ///
    /// * If this is not a pull request event
    pub fn into_pull_request(self) -> Result<PullRequestEvent, ActionError> {
        match self {
            Self::PullRequest(event) => Ok(*event),
            other @ Self::Push(_) => Err(ActionError::UnexpectedEvent(other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use conform_testing::EventBuilder;

    use super::*;

    fn body(value: &serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(value).unwrap()
    }

    #[test]
    fn test_parse_pull_request() {
        let payload = EventBuilder::new("FerretDB", "FerretDB", 42)
            .with_user("octocat", 583_231)
            .with_node_id("PR_kwDOFOO")
            .build_pull_request("opened");

        let event = Event::parse("pull_request", &body(&payload))
            .unwrap()
            .into_pull_request()
            .unwrap();

        assert_eq!(event.action, "opened");
        assert_eq!(event.org(), "FerretDB");
        assert_eq!(event.author(), "octocat");
        assert_eq!(event.node_id(), "PR_kwDOFOO");
        assert_eq!(event.pull_request.number, 42);
    }

    #[test]
    fn test_parse_pull_request_target() {
        let payload = EventBuilder::new("FerretDB", "FerretDB", 1).build_pull_request("edited");

        let event = Event::parse("pull_request_target", &body(&payload)).unwrap();

        assert_eq!(event.kind(), "PullRequestEvent");
    }

    #[test]
    fn test_org_falls_back_to_repository_owner() {
        let payload = EventBuilder::new("octocat", "hello-world", 1)
            .without_organization()
            .build_pull_request("opened");

        let event = Event::parse("pull_request", &body(&payload))
            .unwrap()
            .into_pull_request()
            .unwrap();

        assert_eq!(event.org(), "octocat");
    }

    #[test]
    fn test_parse_push_and_schedule() {
        let payload = body(&EventBuilder::new("octocat", "hello-world", 1).build_push());

        let push = Event::parse("push", &payload).unwrap();
        assert!(matches!(&push, Event::Push(event) if event.ref_name.as_deref() == Some("refs/heads/main")));

        let schedule = Event::parse("schedule", br#"{"schedule": "0 0 * * *"}"#).unwrap();
        assert_eq!(
            schedule,
            Event::Push(PushEvent {
                ref_name: None,
                repository: None,
            })
        );
    }

    #[test]
    fn test_push_is_not_a_pull_request() {
        let payload = body(&EventBuilder::new("octocat", "hello-world", 1).build_push());

        let err = Event::parse("push", &payload)
            .unwrap()
            .into_pull_request()
            .unwrap_err();

        assert_eq!(err.to_string(), "Unexpected event type: PushEvent");
    }

    #[test]
    fn test_unhandled_event() {
        let err = Event::parse("issue_comment", b"{}").unwrap_err();

        assert!(matches!(err, ActionError::UnhandledEvent(name) if name == "issue_comment"));
    }

    #[test]
    fn test_malformed_payload() {
        let err = Event::parse("pull_request", br#"{"action": "opened"}"#).unwrap_err();

        assert!(matches!(err, ActionError::Parse(_)));
    }

    #[test_log::test]
    fn test_read_from_file() {
        let path = std::env::temp_dir().join(format!("conform-event-{}.json", std::process::id()));
        let payload = EventBuilder::new("FerretDB", "FerretDB", 7).build_pull_request("opened");
        std::fs::write(&path, body(&payload)).unwrap();

        let event = Event::read(Some("pull_request"), Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(event.unwrap().into_pull_request().unwrap().org(), "FerretDB");
    }

    #[test]
    fn test_read_missing_env() {
        let path = Path::new("/nonexistent/event.json");

        assert!(matches!(
            Event::read(Some("pull_request"), None),
            Err(ActionError::MissingEnv("GITHUB_EVENT_PATH"))
        ));
        assert!(matches!(
            Event::read(Some("pull_request"), Some(Path::new(""))),
            Err(ActionError::MissingEnv("GITHUB_EVENT_PATH"))
        ));
        assert!(matches!(
            Event::read(Some("pull_request"), Some(path)),
            Err(ActionError::Read { .. })
        ));
    }

    #[test]
    fn test_read_missing_event_name() {
        let path = std::env::temp_dir().join(format!("conform-noname-{}.json", std::process::id()));
        std::fs::write(&path, b"{}").unwrap();

        let result = Event::read(None, Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ActionError::MissingEnv("GITHUB_EVENT_NAME"))));
    }
}
