//! `Link` header handling for paginated REST endpoints.

/// Page number of the `rel="next"` entry of a `Link` header, if any.
///
/// ```text
/// <https://api.github.com/organizations/1/public_members?page=2>; rel="next", <...>; rel="last"
/// ```
#[must_use]
pub fn next_page(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let (url, params) = entry.split_once(';')?;
        if !params
            .split(';')
            .any(|param| param.trim() == r#"rel="next""#)
        {
            return None;
        }

        let url = url.trim().strip_prefix('<')?.strip_suffix('>')?;
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .and_then(|page| page.parse().ok())
    })
}
