use std::sync::LazyLock;

use regex::Regex;

use crate::CheckError;

static STARTS_UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]").unwrap());
static ENDS_PROPERLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[a-zA-Z0-9`'"]$"#).unwrap());

/// # Errors
///
/// * If the title does not start with an uppercase latin letter
/// * If the title ends with anything but a latin letter, a digit or a quote
pub fn check(title: &str) -> Result<(), CheckError> {
    if !STARTS_UPPERCASE.is_match(title) {
        return Err(CheckError::TitleStart);
    }

    if !ENDS_PROPERLY.is_match(title) {
        return Err(CheckError::TitleEnd);
    }

    let first_word = title.split(' ').next().unwrap_or_default();
    if let Some(form) = non_imperative_form(first_word) {
        log::warn!("PR title should start with an imperative verb, {first_word:?} looks like {form}");
    }

    Ok(())
}

/// Guess whether `word` is a verb form other than the imperative.
///
/// Plain suffix matching misfires on plenty of valid titles ("Bump", "Address",
/// "Please"), so the result is advisory only.
#[must_use]
pub fn non_imperative_form(word: &str) -> Option<&'static str> {
    let word = word.to_lowercase();
    let len = word.chars().count();

    if len > 5 && word.ends_with("ing") {
        Some("a gerund")
    } else if len > 3 && word.ends_with("ed") && !word.ends_with("eed") {
        Some("past tense")
    } else if len > 3
        && word.ends_with('s')
        && !["ss", "us", "is", "'s"].iter().any(|suffix| word.ends_with(suffix))
    {
        Some("third person")
    } else {
        None
    }
}
