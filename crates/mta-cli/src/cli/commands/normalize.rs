//! `mta normalize <url>...` – print normalized URLs.

use mta_core::url_model::normalize_url;

pub fn run_normalize(urls: &[String]) {
    for url in urls {
        println!("{}", normalize_url(url));
    }
}
