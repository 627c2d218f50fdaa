#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Conformance rules applied to a [`PullRequest`] snapshot.
//!
//! Every rule is a pure function of the snapshot (and, for some, of the
//! author's [`Audience`]). Rules never depend on each other's outcome.

pub mod audience;
pub mod auto_merge;
pub mod body;
pub mod labels;
mod result;
pub mod size;
pub mod sprint;
pub mod title;

pub use audience::Audience;
pub use result::{CheckError, CheckName, CheckResult, SizeEntry};

use conform_pr_models::PullRequest;
use strum::IntoEnumIterator as _;

/// Run a single rule.
///
/// # Errors
///
/// * If the pull request does not satisfy the rule
pub fn run(check: CheckName, pr: &PullRequest, audience: Audience) -> Result<(), CheckError> {
    match check {
        CheckName::Labels => labels::check(&pr.labels),
        CheckName::Size => size::check(pr),
        CheckName::Sprint => sprint::check(pr, audience),
        CheckName::Title => title::check(&pr.title),
        CheckName::Body => body::check(&pr.body),
        CheckName::AutoMerge => auto_merge::check(pr, audience),
    }
}

/// Run every rule in [`CheckName`] order, collecting one result per rule.
#[must_use]
pub fn run_all(pr: &PullRequest, audience: Audience) -> Vec<CheckResult> {
    CheckName::iter()
        .map(|check| {
            let result = CheckResult::new(check, run(check, pr, audience).err());
            log::debug!("{check}: {result:?}");
            result
        })
        .collect()
}
