use url::Url;

/// Query parameter carrying the site's content identifier
pub const CONTENT_ID_PARAM: &str = "bookId";

/// Resolves a link taken from page markup against the site origin
///
/// # Resolution Rules
///
/// 1. An empty link stays empty
/// 2. A link beginning with `http` is already absolute and returned unchanged
/// 3. Otherwise a single leading `/` is stripped and the remainder is joined
///    onto `base_url` with exactly one `/`
///
/// # Examples
///
/// ```
/// use dramabox_scraper::url::resolve;
///
/// let base = "https://dramabox.web.id";
/// assert_eq!(resolve("/watch.php?bookId=1", base), "https://dramabox.web.id/watch.php?bookId=1");
/// assert_eq!(resolve("watch.php", base), "https://dramabox.web.id/watch.php");
/// assert_eq!(resolve("https://cdn.example.com/a.jpg", base), "https://cdn.example.com/a.jpg");
/// assert_eq!(resolve("", base), "");
/// ```
pub fn resolve(link: &str, base_url: &str) -> String {
    if link.is_empty() || link.starts_with("http") {
        return link.to_string();
    }

    let path = link.strip_prefix('/').unwrap_or(link);
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Extracts the content identifier from a URL's `bookId` query parameter
///
/// Returns `None` when the input is not an absolute URL or carries no
/// `bookId` parameter. Neither case is an error; cards with broken links
/// simply have no identifier.
///
/// # Examples
///
/// ```
/// use dramabox_scraper::url::extract_content_id;
///
/// assert_eq!(
///     extract_content_id("https://dramabox.web.id/watch.php?bookId=abc123"),
///     Some("abc123".to_string())
/// );
/// assert_eq!(extract_content_id("not a url"), None);
/// assert_eq!(extract_content_id("https://dramabox.web.id/watch.php"), None);
/// ```
pub fn extract_content_id(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == CONTENT_ID_PARAM)
        .map(|(_, value)| value.into_owned())
}
