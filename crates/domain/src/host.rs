//! Host extraction and substitution on raw URL strings.
//!
//! URLs are treated as opaque text: the authority is whatever sits between
//! the first `//` and the next `/`. Scheme, path and query are never parsed,
//! so a substitution reproduces them byte for byte.

const SECURE_PREFIX: &str = "https";

/// Returns true when `host` is four dot-separated groups of 1-3 decimal digits.
///
/// Octet ranges are not checked: `999.999.999.999` is accepted.
pub fn is_ip_literal(host: &str) -> bool {
    let mut groups = 0;
    for group in host.split('.') {
        groups += 1;
        if groups > 4 || group.is_empty() || group.len() > 3 {
            return false;
        }
        if !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

/// Byte range of the authority segment, if the URL has one followed by a `/`.
fn authority_span(url: &str) -> Option<(usize, usize)> {
    let start = url.find("//")? + 2;
    // the authority must be at least one character long
    let first = url[start..].chars().next()?;
    let search_from = start + first.len_utf8();
    let end = search_from + url[search_from..].find('/')?;
    Some((start, end))
}

/// Extracts the authority between `//` and the next `/`.
pub fn extract_host(url: &str) -> Option<&str> {
    authority_span(url).map(|(start, end)| &url[start..end])
}

/// Replaces the authority segment with `new_host`. URLs without one are
/// returned unchanged.
pub fn substitute_host(url: &str, new_host: &str) -> String {
    match authority_span(url) {
        Some((start, end)) => {
            let mut rewritten = String::with_capacity(url.len() - (end - start) + new_host.len());
            rewritten.push_str(&url[..start]);
            rewritten.push_str(new_host);
            rewritten.push_str(&url[end..]);
            rewritten
        }
        None => url.to_string(),
    }
}

pub fn is_secure(url: &str) -> bool {
    url.get(..SECURE_PREFIX.len() + 3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("https://"))
}

/// `https://...` becomes `http://...`; anything else is returned as is.
pub fn downgrade_scheme(url: &str) -> String {
    if is_secure(url) {
        format!("http{}", &url[SECURE_PREFIX.len()..])
    } else {
        url.to_string()
    }
}
