use crate::extract::dom::{first_attr, label_value, nth_text, selector, text_of};
use crate::extract::types::ContentCard;
use crate::url::{extract_content_id, resolve};
use crate::MarkupError;
use scraper::Html;

const RANK_ITEM: &str = ".sidebar-widget .rank-list .rank-item";
const RANK_NUMBER: &str = ".rank-number";
const RANK_TITLE: &str = ".rank-title";
const RANK_IMAGE: &str = ".rank-image img";
const RANK_META: &str = ".rank-meta span";

/// Extracts the trending ranking from the front page sidebar
///
/// Each rank item is itself the link to the title. Views and episode count
/// are the first and second metadata spans, by position.
pub fn parse_trending(document: &Html, base_url: &str) -> Result<Vec<ContentCard>, MarkupError> {
    let item_sel = selector(RANK_ITEM)?;
    let number_sel = selector(RANK_NUMBER)?;
    let title_sel = selector(RANK_TITLE)?;
    let image_sel = selector(RANK_IMAGE)?;
    let meta_sel = selector(RANK_META)?;

    let mut ranking = Vec::new();

    for item in document.select(&item_sel) {
        let href = item.value().attr("href").unwrap_or_default();
        let link = resolve(href, base_url);

        ranking.push(ContentCard {
            title: text_of(item, &title_sel),
            content_id: extract_content_id(&link),
            image: first_attr(item, &image_sel, "src"),
            views: label_value(&nth_text(item, &meta_sel, 0)),
            episode_count: label_value(&nth_text(item, &meta_sel, 1)),
            rank: Some(text_of(item, &number_sel)),
        });
    }

    Ok(ranking)
}
