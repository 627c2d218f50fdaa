//! Shapes of the GraphQL pull request query.
//!
//! Project fields and their values are GraphQL unions. They are decoded into
//! closed enums keyed by `__typename`; kinds that are not listed fall into an
//! `Unknown` variant and are ignored by consumers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` of a `node(id:)` query.
///
/// The node is kept untyped until it is known to be a pull request, since a
/// node of any other type comes back as an empty object.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeData {
    pub node: Option<serde_json::Value>,
}

/// `data` of the `viewer` query used to check the GraphQL token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerData {
    pub viewer: Viewer,
    pub rate_limit: Option<RateLimit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Viewer {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub closed: bool,
    /// `null` when the author account was deleted.
    pub author: Option<Actor>,
    pub auto_merge_request: Option<AutoMergeRequest>,
    #[serde(default)]
    pub labels: Connection<LabelNode>,
    #[serde(default)]
    pub project_items: Connection<ProjectItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub login: String,
}

impl Actor {
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.typename == "Bot"
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoMergeRequest {
    pub enabled_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelNode {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub project: ProjectRef,
    #[serde(default)]
    pub field_values: Connection<ProjectFieldValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRef {
    pub title: String,
    #[serde(default)]
    pub fields: Connection<ProjectField>,
}

/// Field definition of a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum ProjectField {
    #[serde(rename = "ProjectV2IterationField")]
    Iteration { name: String },
    #[serde(rename = "ProjectV2SingleSelectField")]
    SingleSelect { name: String },
    #[serde(rename = "ProjectV2Field")]
    Plain { name: String },
    #[serde(other)]
    Unknown,
}

/// Field the value belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldRef {
    pub name: String,
}

/// Value of a project field on a single project item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__typename")]
pub enum ProjectFieldValue {
    #[serde(rename = "ProjectV2ItemFieldIterationValue", rename_all = "camelCase")]
    Iteration {
        field: FieldRef,
        title: String,
        /// `YYYY-MM-DD`.
        start_date: Option<String>,
        /// Length in days.
        duration: Option<u32>,
    },
    #[serde(rename = "ProjectV2ItemFieldSingleSelectValue")]
    SingleSelect { field: FieldRef, name: Option<String> },
    #[serde(rename = "ProjectV2ItemFieldTextValue")]
    Text { field: FieldRef, text: Option<String> },
    #[serde(rename = "ProjectV2ItemFieldNumberValue")]
    Number { field: FieldRef, number: Option<f64> },
    #[serde(rename = "ProjectV2ItemFieldDateValue")]
    Date { field: FieldRef, date: Option<String> },
    #[serde(other)]
    Unknown,
}
