//! Pull request GraphQL query and its decoding into a [`PullRequest`] snapshot.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use conform_git_provider::ProviderError;
use conform_github_models::{ProjectField, ProjectFieldValue, ProjectItem, PullRequestNode};
use conform_pr_models::{Fields, PullRequest};

/// Page size of every connection in [`PULL_REQUEST_QUERY`].
///
/// A connection that comes back full may have been truncated.
pub const PAGE_SIZE: usize = 20;

pub const PULL_REQUEST_QUERY: &str = r"query($nodeID: ID!) {
  node(id: $nodeID) {
    ... on PullRequest {
      title
      body
      closed
      author {
        __typename
        login
      }
      autoMergeRequest {
        enabledAt
      }
      labels(first: 20) {
        nodes {
          name
        }
      }
      projectItems(first: 20) {
        nodes {
          project {
            title
            fields(first: 20) {
              nodes {
                __typename
                ... on ProjectV2FieldCommon {
                  name
                }
              }
            }
          }
          fieldValues(first: 20) {
            nodes {
              __typename
              ... on ProjectV2ItemFieldValueCommon {
                field {
                  ... on ProjectV2FieldCommon {
                    name
                  }
                }
              }
              ... on ProjectV2ItemFieldIterationValue {
                title
                startDate
                duration
              }
              ... on ProjectV2ItemFieldSingleSelectValue {
                name
              }
              ... on ProjectV2ItemFieldTextValue {
                text
              }
              ... on ProjectV2ItemFieldNumberValue {
                number
              }
              ... on ProjectV2ItemFieldDateValue {
                date
              }
            }
          }
        }
      }
    }
  }
}";

/// Suffix of the derived field telling whether an iteration is the active one.
pub const IS_CURRENT_SUFFIX: &str = "/IsCurrent";

/// Build the snapshot from a decoded pull request node.
///
/// `today` decides which iterations are current.
///
/// # Errors
///
/// * If any connection returned a full page
pub fn decode_pull_request(
    node: PullRequestNode,
    today: NaiveDate,
) -> Result<PullRequest, ProviderError> {
    ensure_not_truncated(node.labels.nodes.len(), "Labels")?;
    ensure_not_truncated(node.project_items.nodes.len(), "ProjectItems")?;

    let (author, author_is_bot) = node
        .author
        .map_or_else(|| (String::new(), false), |actor| {
            let is_bot = actor.is_bot();
            (actor.login, is_bot)
        });

    let mut project_fields = HashMap::new();
    for item in node.project_items.nodes {
        ensure_not_truncated(
            item.project.fields.nodes.len(),
            "ProjectItems.Project.Fields",
        )?;
        ensure_not_truncated(item.field_values.nodes.len(), "ProjectItems.FieldValues")?;

        let fields = decode_fields(&item, today);
        project_fields.insert(item.project.title, fields);
    }

    Ok(PullRequest {
        title: node.title,
        body: node.body,
        author,
        author_is_bot,
        labels: node.labels.nodes.into_iter().map(|label| label.name).collect(),
        closed: node.closed,
        auto_merge_enabled: node.auto_merge_request.is_some(),
        project_fields,
    })
}

fn ensure_not_truncated(len: usize, what: &'static str) -> Result<(), ProviderError> {
    if len >= PAGE_SIZE {
        return Err(ProviderError::TooManyNodes(what));
    }

    Ok(())
}

fn decode_fields(item: &ProjectItem, today: NaiveDate) -> Fields {
    let mut fields = Fields::new();

    // An unset iteration has no value node at all, so seed every iteration
    // field to tell "unset" apart from "not on this project".
    for field in &item.project.fields.nodes {
        if let ProjectField::Iteration { name } = field {
            fields.insert(name.clone(), String::new());
        }
    }

    for value in &item.field_values.nodes {
        match value {
            ProjectFieldValue::Iteration {
                field,
                title,
                start_date,
                duration,
            } => {
                fields.insert(field.name.clone(), title.clone());

                if let (Some(start_date), Some(duration)) = (start_date, duration) {
                    let current = is_current_iteration(start_date, *duration, today);
                    fields.insert(
                        format!("{}{IS_CURRENT_SUFFIX}", field.name),
                        current.to_string(),
                    );
                }
            }
            ProjectFieldValue::SingleSelect { field, name } => {
                fields.insert(field.name.clone(), name.clone().unwrap_or_default());
            }
            ProjectFieldValue::Text { field, text } => {
                fields.insert(field.name.clone(), text.clone().unwrap_or_default());
            }
            ProjectFieldValue::Number { field, number } => {
                fields.insert(
                    field.name.clone(),
                    number.map(|n| n.to_string()).unwrap_or_default(),
                );
            }
            ProjectFieldValue::Date { field, date } => {
                fields.insert(field.name.clone(), date.clone().unwrap_or_default());
            }
            ProjectFieldValue::Unknown => {}
        }
    }

    fields
}

/// Whether `today` falls within `[start_date, start_date + duration days)`.
#[must_use]
pub fn is_current_iteration(start_date: &str, duration: u32, today: NaiveDate) -> bool {
    let Ok(start) = NaiveDate::parse_from_str(start_date, "%Y-%m-%d") else {
        log::warn!("Unparsable iteration start date: {start_date:?}");
        return false;
    };

    let Some(end) = start.checked_add_days(Days::new(u64::from(duration))) else {
        return false;
    };

    start <= today && today < end
}
