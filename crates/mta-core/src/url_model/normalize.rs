//! Collapse doubled path separators without touching the scheme delimiter.

use super::SCHEME_DELIMITER;

/// Normalizes a URL by collapsing runs of `/` in its path.
///
/// - Splits at the first `://`; everything up to and including it is copied
///   through, so `https://` never turns into `https:/`
/// - Only the path after the authority is collapsed; query string and
///   fragment are kept as-is
/// - For `http`/`https`, stray slashes before the host (`https:///host`) are dropped
/// - Without a scheme delimiter, or when the first `://` sits inside the query
///   or fragment, the whole string is treated as a path
///
/// Normalizing an already-normal URL returns it unchanged, so the function is
/// idempotent.
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let Some(idx) = url.find(SCHEME_DELIMITER) else {
        return collapse_path(url);
    };
    let scheme = &url[..idx];
    if scheme.contains(['?', '#']) {
        return collapse_path(url);
    }

    let mut rest = &url[idx + SCHEME_DELIMITER.len()..];
    if is_web_scheme(scheme) {
        rest = rest.trim_start_matches('/');
    }

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, path) = rest.split_at(authority_end);

    let mut out = String::with_capacity(url.len());
    out.push_str(scheme);
    out.push_str(SCHEME_DELIMITER);
    out.push_str(authority);
    out.push_str(&collapse_path(path));
    out
}

/// Like [`normalize_url`], passing `None` through untouched.
pub fn normalize_url_opt(url: Option<&str>) -> Option<String> {
    url.map(normalize_url)
}

/// `http` or `https`, ignoring surrounding whitespace and case.
fn is_web_scheme(scheme: &str) -> bool {
    let scheme = scheme.trim();
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

fn collapse_path(path: &str) -> String {
    let split = path.find(['?', '#']).unwrap_or(path.len());
    let (head, tail) = path.split_at(split);

    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in head.chars() {
        if c == '/' {
            if !prev_slash {
                out.push('/');
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out.push_str(tail);
    out
}
