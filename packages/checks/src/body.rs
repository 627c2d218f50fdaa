use std::sync::LazyLock;

use regex::Regex;

use crate::CheckError;

// `.` does not match `\n` and `$` is the end of the text, so only the last
// line matters.
static ENDS_WITH_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+[.!?]\n?$").unwrap());

/// An empty body is fine; otherwise it must end with `.`, `!` or `?`,
/// optionally followed by one newline.
///
/// # Errors
///
/// * If a non-empty body does not end with a punctuation mark
pub fn check(body: &str) -> Result<(), CheckError> {
    log::debug!("Body: {body:?}");

    let body = body.replace("\r\n", "\n");
    if body.is_empty() || ENDS_WITH_PUNCTUATION.is_match(&body) {
        return Ok(());
    }

    Err(CheckError::BodyPunctuation)
}
