use std::collections::{BTreeSet, HashMap};

use conform_pr_models::{Fields, PullRequest};
use serde_json::{Value, json};

#[derive(Debug, Clone, Default)]
struct ProjectFixture {
    fields: Vec<Value>,
    values: Vec<Value>,
    iterations: Vec<String>,
    set: Vec<(String, String)>,
}

/// Builds pull request nodes the way the GraphQL API returns them.
#[derive(Debug, Clone)]
pub struct PullRequestBuilder {
    title: String,
    body: String,
    author_login: String,
    author_is_bot: bool,
    closed: bool,
    auto_merge: bool,
    labels: Vec<String>,
    projects: Vec<(String, ProjectFixture)>,
}

impl PullRequestBuilder {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: String::new(),
            author_login: "test-user".to_string(),
            author_is_bot: false,
            closed: false,
            auto_merge: false,
            labels: Vec::new(),
            projects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    #[must_use]
    pub fn with_author(mut self, login: &str, is_bot: bool) -> Self {
        self.author_login = login.to_string();
        self.author_is_bot = is_bot;
        self
    }

    #[must_use]
    pub const fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    #[must_use]
    pub const fn with_auto_merge(mut self, enabled: bool) -> Self {
        self.auto_merge = enabled;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels.extend(labels.iter().map(ToString::to_string));
        self
    }

    /// Add the pull request to `project` without setting any field.
    #[must_use]
    pub fn with_project(mut self, project: &str) -> Self {
        self.project(project);
        self
    }

    /// Set a single-select field. An empty `value` leaves the field unset,
    /// which the API reports by omitting the value node.
    #[must_use]
    pub fn with_project_field(mut self, project: &str, field: &str, value: &str) -> Self {
        let fixture = self.project(project);
        fixture.fields.push(json!({
            "__typename": "ProjectV2SingleSelectField",
            "name": field,
        }));

        if !value.is_empty() {
            fixture.values.push(json!({
                "__typename": "ProjectV2ItemFieldSingleSelectValue",
                "field": { "name": field },
                "name": value,
            }));
            fixture.set.push((field.to_string(), value.to_string()));
        }

        self
    }

    #[must_use]
    pub fn with_iteration(
        mut self,
        project: &str,
        field: &str,
        title: &str,
        start_date: &str,
        duration: u32,
    ) -> Self {
        let fixture = self.project(project);
        fixture.fields.push(json!({
            "__typename": "ProjectV2IterationField",
            "name": field,
        }));
        fixture.values.push(json!({
            "__typename": "ProjectV2ItemFieldIterationValue",
            "field": { "name": field },
            "title": title,
            "startDate": start_date,
            "duration": duration,
        }));
        fixture.iterations.push(field.to_string());
        fixture.set.push((field.to_string(), title.to_string()));
        self
    }

    /// Declare an iteration field on `project` with no iteration picked.
    #[must_use]
    pub fn with_unset_iteration(mut self, project: &str, field: &str) -> Self {
        let fixture = self.project(project);
        fixture.fields.push(json!({
            "__typename": "ProjectV2IterationField",
            "name": field,
        }));
        fixture.iterations.push(field.to_string());
        self
    }

    fn project(&mut self, title: &str) -> &mut ProjectFixture {
        let index = if let Some(index) = self.projects.iter().position(|(t, _)| t == title) {
            index
        } else {
            self.projects
                .push((title.to_string(), ProjectFixture::default()));
            self.projects.len() - 1
        };

        &mut self.projects[index].1
    }

    #[must_use]
    pub fn build_node(&self) -> Value {
        let auto_merge = self
            .auto_merge
            .then(|| json!({ "enabledAt": "2024-03-15T10:00:00Z" }));
        let author_type = if self.author_is_bot { "Bot" } else { "User" };

        let labels: Vec<Value> = self
            .labels
            .iter()
            .map(|name| json!({ "name": name }))
            .collect();

        let items: Vec<Value> = self
            .projects
            .iter()
            .map(|(title, fixture)| {
                json!({
                    "project": {
                        "title": title,
                        "fields": { "nodes": fixture.fields },
                    },
                    "fieldValues": { "nodes": fixture.values },
                })
            })
            .collect();

        json!({
            "title": self.title,
            "body": self.body,
            "closed": self.closed,
            "author": {
                "__typename": author_type,
                "login": self.author_login,
            },
            "autoMergeRequest": auto_merge,
            "labels": { "nodes": labels },
            "projectItems": { "nodes": items },
        })
    }

    /// Full `{"data": {"node": ...}}` body of a GraphQL response.
    #[must_use]
    pub fn build_graphql_response(&self) -> Value {
        json!({ "data": { "node": self.build_node() } })
    }

    /// The snapshot a fetcher would produce, minus the derived
    /// `<field>/IsCurrent` entries, which depend on the date of the run.
    #[must_use]
    pub fn build(&self) -> PullRequest {
        let project_fields: HashMap<String, Fields> = self
            .projects
            .iter()
            .map(|(title, fixture)| {
                let mut fields: Fields = fixture
                    .iterations
                    .iter()
                    .map(|name| (name.clone(), String::new()))
                    .collect();
                fields.extend(fixture.set.iter().cloned());
                (title.clone(), fields)
            })
            .collect();

        PullRequest {
            title: self.title.clone(),
            body: self.body.clone(),
            author: self.author_login.clone(),
            author_is_bot: self.author_is_bot,
            labels: self.labels.iter().cloned().collect::<BTreeSet<_>>(),
            closed: self.closed,
            auto_merge_enabled: self.auto_merge,
            project_fields,
        }
    }
}
