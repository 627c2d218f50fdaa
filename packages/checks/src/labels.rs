use std::collections::BTreeSet;

use crate::CheckError;

/// Labels meant for issues only, plus temporary ones, in reporting order.
pub const DISALLOWED_LABELS: &[&str] = &[
    "good first issue",
    "help wanted",
    "scope changed",
    "code/tigris",
    "fuzz",
    "validation",
];

pub const DO_NOT_MERGE: &str = "do not merge";
pub const NOT_READY: &str = "not ready";

/// # Errors
///
/// * If any [`DISALLOWED_LABELS`] is applied, all of them are reported at once
/// * Otherwise, if [`DO_NOT_MERGE`] or [`NOT_READY`] is applied, in that order
pub fn check(labels: &BTreeSet<String>) -> Result<(), CheckError> {
    let disallowed: Vec<String> = DISALLOWED_LABELS
        .iter()
        .filter(|label| labels.contains(**label))
        .map(ToString::to_string)
        .collect();

    if !disallowed.is_empty() {
        return Err(CheckError::DisallowedLabels(disallowed));
    }

    if labels.contains(DO_NOT_MERGE) {
        return Err(CheckError::DoNotMerge);
    }

    if labels.contains(NOT_READY) {
        return Err(CheckError::NotReady);
    }

    Ok(())
}
