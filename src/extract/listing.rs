use crate::extract::dom::{first_attr, label_value, nth_text, selector, text_of};
use crate::extract::types::ContentCard;
use crate::url::{extract_content_id, resolve};
use crate::MarkupError;
use scraper::{ElementRef, Html, Selector};

const CARD: &str = ".drama-grid .drama-card";
const WATCH_BUTTON: &str = ".watch-button";
const TITLE: &str = ".drama-title";
const IMAGE: &str = ".drama-image img";
const META: &str = ".drama-meta span";
const EPISODE_COUNT: &str = r#".drama-meta span[itemprop="numberOfEpisodes"]"#;

/// Compiled selectors for one listing card
struct CardSelectors {
    card: Selector,
    link: Selector,
    title: Selector,
    image: Selector,
    meta: Selector,
    episodes: Selector,
}

impl CardSelectors {
    fn compile() -> Result<Self, MarkupError> {
        Ok(Self {
            card: selector(CARD)?,
            link: selector(WATCH_BUTTON)?,
            title: selector(TITLE)?,
            image: selector(IMAGE)?,
            meta: selector(META)?,
            episodes: selector(EPISODE_COUNT)?,
        })
    }
}

/// Extracts the latest-updates grid from the front page
///
/// Cards come back in document order; an empty grid yields an empty list.
///
/// # Example
///
/// ```
/// use dramabox_scraper::extract::parse_latest;
/// use scraper::Html;
///
/// let html = r#"<div class="drama-grid"><div class="drama-card">
///     <h3 class="drama-title">Hidden Heiress</h3>
///     <a class="watch-button" href="/watch.php?bookId=42">Watch</a>
/// </div></div>"#;
/// let cards = parse_latest(&Html::parse_document(html), "https://dramabox.web.id").unwrap();
/// assert_eq!(cards[0].content_id.as_deref(), Some("42"));
/// ```
pub fn parse_latest(document: &Html, base_url: &str) -> Result<Vec<ContentCard>, MarkupError> {
    parse_cards(document, base_url, true)
}

/// Extracts result cards from a search page
///
/// Search cards share the listing markup but never report an episode count.
pub fn parse_search_results(
    document: &Html,
    base_url: &str,
) -> Result<Vec<ContentCard>, MarkupError> {
    parse_cards(document, base_url, false)
}

fn parse_cards(
    document: &Html,
    base_url: &str,
    with_episodes: bool,
) -> Result<Vec<ContentCard>, MarkupError> {
    let selectors = CardSelectors::compile()?;

    let cards = document
        .select(&selectors.card)
        .map(|card| parse_card(card, &selectors, base_url, with_episodes))
        .collect();

    Ok(cards)
}

fn parse_card(
    card: ElementRef<'_>,
    selectors: &CardSelectors,
    base_url: &str,
    with_episodes: bool,
) -> ContentCard {
    let href = first_attr(card, &selectors.link, "href").unwrap_or_default();
    let link = resolve(&href, base_url);

    let episode_count = if with_episodes {
        label_value(&text_of(card, &selectors.episodes))
    } else {
        None
    };

    ContentCard {
        title: text_of(card, &selectors.title),
        content_id: extract_content_id(&link),
        image: first_attr(card, &selectors.image, "src"),
        views: label_value(&nth_text(card, &selectors.meta, 0)),
        episode_count,
        rank: None,
    }
}
