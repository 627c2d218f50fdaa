use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Login GitHub reports for dependency-bump pull requests.
pub const DEPENDABOT_LOGIN: &str = "dependabot";

/// Project field values keyed by field name.
///
/// Values are display strings; an empty string means the field exists on the
/// project but is unset.
pub type Fields = HashMap<String, String>;

/// Snapshot of a pull request, fetched once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub body: String,
    pub author: String,
    pub author_is_bot: bool,
    pub labels: BTreeSet<String>,
    pub closed: bool,
    pub auto_merge_enabled: bool,
    /// Project title to that project's fields.
    pub project_fields: HashMap<String, Fields>,
}

impl PullRequest {
    /// Whether the pull request was opened by Dependabot itself rather than
    /// by a user who happens to be named like it.
    #[must_use]
    pub fn is_dependabot(&self) -> bool {
        self.author_is_bot && self.author == DEPENDABOT_LOGIN
    }

    /// Project titles in lexicographic order.
    #[must_use]
    pub fn sorted_projects(&self) -> Vec<&str> {
        let mut projects: Vec<&str> = self.project_fields.keys().map(String::as_str).collect();
        projects.sort_unstable();
        projects
    }

    /// Value of `field` in `project`, or `""` when either is missing.
    #[must_use]
    pub fn field(&self, project: &str, field: &str) -> &str {
        self.project_fields
            .get(project)
            .and_then(|fields| fields.get(field))
            .map_or("", String::as_str)
    }
}
