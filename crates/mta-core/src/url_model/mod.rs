//! URL cleanup for node links taken from exports.
//!
//! Exported `view_node` values are often built by string concatenation and
//! end up with doubled slashes (`https://example.com//node//12`). The
//! normalizer collapses those inside the path while keeping the `://`
//! scheme delimiter intact.

mod normalize;

pub use normalize::{normalize_url, normalize_url_opt};

/// Scheme delimiter that must survive normalization untouched.
pub const SCHEME_DELIMITER: &str = "://";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_path_but_keeps_scheme() {
        assert_eq!(
            normalize_url("https://example.com//a//b/"),
            "https://example.com/a/b/"
        );
        assert!(normalize_url("https://example.com//a").contains(SCHEME_DELIMITER));
    }

    #[test]
    fn idempotent_on_sample_urls() {
        let samples = [
            "https://example.com//a//b/",
            "http://example.com/node/12",
            "https:///example.com//x",
            "https://example.com///",
            "https://example.com/a?next=http://b.example//c",
            "ftp://files.example.com////pub//debian",
            "file:///etc//hosts",
            "//cdn.example.com//x",
        ];
        for url in samples {
            let once = normalize_url(url);
            let twice = normalize_url(&once);
            assert_eq!(once, twice, "not idempotent for {url}");
        }
    }

    #[test]
    fn empty_and_absent() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url_opt(None), None);
        assert_eq!(normalize_url_opt(Some("")).as_deref(), Some(""));
    }
}
