//! Live page retrieval and meta description extraction.
//!
//! Uses the curl crate (libcurl) for a plain GET and `scraper` to pick the
//! description out of the returned HTML. Callers depend on [`PageSource`] so
//! audits can run against canned pages in tests.

mod extract;

pub use extract::extract_description;

use std::time::Duration;
use thiserror::Error;

use crate::config::FetchConfig;

/// Why a page could not be retrieved. Reported per URL; never fatal to a batch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u32 },
}

/// Anything that can turn a URL into page HTML.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production [`PageSource`] backed by libcurl.
#[derive(Debug, Clone, Default)]
pub struct CurlPageSource {
    config: FetchConfig,
}

impl CurlPageSource {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

impl PageSource for CurlPageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        fetch_page(url, &self.config)
    }
}

/// Performs a GET and returns the body as text (lossy UTF-8).
///
/// Non-2xx responses are errors. Runs in the current thread.
pub fn fetch_page(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.useragent(&config.user_agent).map_err(transport)?;
    easy.follow_location(config.follow_redirects)
        .map_err(transport)?;
    easy.connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .map_err(transport)?;
    easy.timeout(Duration::from_secs(config.timeout_secs))
        .map_err(transport)?;
    // Empty string: accept every encoding libcurl can decode.
    easy.accept_encoding("").map_err(transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let status = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }
    tracing::debug!("fetched {} ({} bytes)", url, body.len());

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Fetches `url` through `source` and extracts its meta description.
///
/// `Ok(None)` means the page loaded but carries no description tag.
pub fn page_description<S: PageSource + ?Sized>(
    source: &S,
    url: &str,
) -> Result<Option<String>, FetchError> {
    let html = source.fetch(url)?;
    Ok(extract_description(&html))
}
