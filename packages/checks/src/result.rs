use strum::{Display, EnumIter};

use crate::Audience;

/// Rules, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CheckName {
    Labels,
    Size,
    Sprint,
    Title,
    Body,
    #[strum(serialize = "Auto-merge")]
    AutoMerge,
}

/// A project whose `Size` field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub project: String,
    pub size: String,
}

impl std::fmt::Display for SizeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} for project {:?}", self.size, self.project)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// Labels that must never be on a pull request
    #[error("Those labels should not be applied to PRs: {}.", .0.join(", "))]
    DisallowedLabels(Vec<String>),
    /// `do not merge` label
    #[error("That PR should not be merged yet.")]
    DoNotMerge,
    /// `not ready` label
    #[error("That PR can't be merged yet; remove `not ready` label.")]
    NotReady,
    /// `Size` set on at least one project
    #[error("PR should have \"Size\" field unset, got {}.", join_sizes(.0))]
    SizeSet(Vec<SizeEntry>),
    /// No project has a `Sprint`
    #[error("{}", .0.reassure("PR should have \"Sprint\" field set.", "maintainers will set it for you"))]
    SprintUnset(Audience),
    /// Title starts with something other than an uppercase letter
    #[error("PR title must start with an uppercase letter.")]
    TitleStart,
    /// Title ends with punctuation or whitespace
    #[error("PR title must end with a latin letter or digit.")]
    TitleEnd,
    /// Body does not end with a punctuation mark
    #[error("PR body must end with dot or other punctuation mark.")]
    BodyPunctuation,
    /// Open pull request without auto-merge
    #[error("{}", .0.reassure("PR should have auto-merge enabled.", "maintainers will enable it for you"))]
    AutoMergeDisabled(Audience),
}

fn join_sizes(entries: &[SizeEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub check: CheckName,
    /// `None` when the rule passed.
    pub error: Option<CheckError>,
}

impl CheckResult {
    #[must_use]
    pub const fn new(check: CheckName, error: Option<CheckError>) -> Self {
        Self { check, error }
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none()
    }
}
