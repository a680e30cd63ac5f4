use crate::config::SiteConfig;
use crate::url::resolve::CONTENT_ID_PARAM;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a URI component, as browsers' `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Front page carrying both the latest grid and the trending sidebar
pub fn home_url(site: &SiteConfig) -> String {
    site.base_url.clone()
}

/// Search results page for a query
///
/// The query is trimmed and percent-encoded (a space becomes `%20`);
/// validation of empty queries happens in the client before this is called.
pub fn search_url(site: &SiteConfig, query: &str) -> String {
    page(site, "search.php", &[("lang", site.locale.as_str()), ("q", query.trim())])
}

/// Watch page for a title, used for its details and episode list
pub fn watch_url(site: &SiteConfig, content_id: &str) -> String {
    page(
        site,
        "watch.php",
        &[(CONTENT_ID_PARAM, content_id), ("lang", site.locale.as_str())],
    )
}

/// Watch page opened on a specific episode
pub fn episode_url(site: &SiteConfig, content_id: &str, episode: &str) -> String {
    page(
        site,
        "watch.php",
        &[
            (CONTENT_ID_PARAM, content_id),
            ("lang", site.locale.as_str()),
            ("episode", episode),
        ],
    )
}

fn page(site: &SiteConfig, script: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}/{}?{}", site.base_url.trim_end_matches('/'), script, query)
}
