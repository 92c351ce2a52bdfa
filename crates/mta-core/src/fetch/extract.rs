//! Meta description lookup in page HTML.

use scraper::{Html, Selector};

const DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;
const OG_DESCRIPTION_SELECTOR: &str = r#"meta[property="og:description"]"#;

/// Returns the trimmed `content` of `<meta name="description">`, falling back
/// to `<meta property="og:description">`. `None` when neither tag exists.
pub fn extract_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    meta_content(&document, DESCRIPTION_SELECTOR)
        .or_else(|| meta_content(&document, OG_DESCRIPTION_SELECTOR))
}

/// Content of the first tag matching `selector`; a tag without `content` reads as "".
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.value().attr("content").unwrap_or("").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_named_description() {
        let html = r#"<html><head>
            <meta property="og:description" content="From OG">
            <meta name="description" content="  From name  ">
        </head><body></body></html>"#;
        assert_eq!(extract_description(html).as_deref(), Some("From name"));
    }

    #[test]
    fn falls_back_to_og_description() {
        let html = r#"<html><head><meta property="og:description" content="Only OG"></head></html>"#;
        assert_eq!(extract_description(html).as_deref(), Some("Only OG"));
    }

    #[test]
    fn none_when_no_tag() {
        let html = "<html><head><title>x</title></head><body><p>hi</p></body></html>";
        assert_eq!(extract_description(html), None);
    }

    #[test]
    fn first_of_several_wins() {
        let html = r#"<meta name="description" content="first"><meta name="description" content="second">"#;
        assert_eq!(extract_description(html).as_deref(), Some("first"));
    }

    #[test]
    fn missing_content_attribute_is_empty() {
        let html = r#"<meta name="description">"#;
        assert_eq!(extract_description(html).as_deref(), Some(""));
    }
}
