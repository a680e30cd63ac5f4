use crate::client::fetcher::{Fetcher, HttpFetcher};
use crate::config::{Config, SiteConfig};
use crate::extract::{self, ContentCard, ContentDetail, StreamInfo};
use crate::url::{episode_url, home_url, search_url, watch_url};
use crate::{MarkupError, Result, ScraperError};
use scraper::Html;

/// Runs extraction operations against the configured site
///
/// Every operation issues exactly one request and then parses the response
/// synchronously. The client holds no mutable state, so one instance can
/// serve any number of concurrent calls.
///
/// # Example
///
/// ```no_run
/// use dramabox_scraper::{Config, DramaboxClient};
///
/// # async fn example() -> dramabox_scraper::Result<()> {
/// let client = DramaboxClient::new(&Config::default())?;
/// for card in client.latest().await? {
///     println!("{} ({:?})", card.title, card.content_id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DramaboxClient<F = HttpFetcher> {
    fetcher: F,
    site: SiteConfig,
}

impl DramaboxClient<HttpFetcher> {
    /// Creates a client that fetches over HTTP
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Ok(Self::with_fetcher(fetcher, config.site.clone()))
    }
}

impl<F: Fetcher> DramaboxClient<F> {
    /// Creates a client around any [`Fetcher`]
    pub fn with_fetcher(fetcher: F, site: SiteConfig) -> Self {
        Self { fetcher, site }
    }

    /// Site this client scrapes
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Latest updates grid from the front page
    pub async fn latest(&self) -> Result<Vec<ContentCard>> {
        let context = "retrieve latest";
        let document = self.load(&home_url(&self.site), context).await?;

        let cards = extract::parse_latest(&document, &self.site.base_url)
            .map_err(|e| markup_error(context, e))?;

        tracing::info!("Extracted {} latest cards", cards.len());
        Ok(cards)
    }

    /// Trending ranking from the front page sidebar
    pub async fn trending(&self) -> Result<Vec<ContentCard>> {
        let context = "retrieve trending";
        let document = self.load(&home_url(&self.site), context).await?;

        let ranking = extract::parse_trending(&document, &self.site.base_url)
            .map_err(|e| markup_error(context, e))?;

        tracing::info!("Extracted {} trending cards", ranking.len());
        Ok(ranking)
    }

    /// Search results for a query
    ///
    /// Fails with [`ScraperError::Validation`] before any request when the
    /// query is blank.
    pub async fn search(&self, query: &str) -> Result<Vec<ContentCard>> {
        if query.trim().is_empty() {
            return Err(ScraperError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let context = format!("search for \"{}\"", query);
        let document = self.load(&search_url(&self.site, query), &context).await?;

        let results = extract::parse_search_results(&document, &self.site.base_url)
            .map_err(|e| markup_error(&context, e))?;

        tracing::info!("Search for '{}' returned {} results", query.trim(), results.len());
        Ok(results)
    }

    /// Details and episode list of a title
    pub async fn detail(&self, book_id: &str) -> Result<ContentDetail> {
        if book_id.trim().is_empty() {
            return Err(ScraperError::Validation(
                "Book ID cannot be empty".to_string(),
            ));
        }

        let context = format!("get details for \"{}\"", book_id);
        let document = self.load(&watch_url(&self.site, book_id), &context).await?;

        let detail =
            extract::parse_detail(&document, book_id).map_err(|e| markup_error(&context, e))?;

        tracing::info!(
            "Extracted details for {} with {} episodes",
            book_id,
            detail.episode_list.len()
        );
        Ok(detail)
    }

    /// Stream URL of one episode
    ///
    /// A page without a playable source is a normal outcome and returns a
    /// [`StreamInfo`] whose `video_url` is `None`.
    pub async fn stream(&self, book_id: &str, episode: &str) -> Result<StreamInfo> {
        if book_id.trim().is_empty() || episode.trim().is_empty() {
            return Err(ScraperError::Validation(
                "Book ID and episode cannot be empty".to_string(),
            ));
        }

        let context = format!("get stream for \"{}/{}\"", book_id, episode);
        let url = episode_url(&self.site, book_id, episode);
        let document = self.load(&url, &context).await?;

        let info = extract::parse_stream(&document, book_id, episode)
            .map_err(|e| markup_error(&context, e))?;

        if !info.has_stream() {
            tracing::warn!("No video source found for {}/{}", book_id, episode);
        }
        Ok(info)
    }

    /// Fetches and parses a page, attaching `context` to any failure
    async fn load(&self, url: &str, context: &str) -> Result<Html> {
        let body = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| ScraperError::extraction(context, e))?;

        Ok(Html::parse_document(&body))
    }
}

fn markup_error(context: &str, error: MarkupError) -> ScraperError {
    ScraperError::extraction(context, error)
}
