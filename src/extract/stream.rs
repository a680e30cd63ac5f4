use crate::extract::dom::{first_attr, selector};
use crate::extract::types::StreamInfo;
use crate::MarkupError;
use scraper::Html;

const VIDEO_SOURCE: &str = "#mainVideo source";
const VIDEO: &str = "#mainVideo";

/// Extracts the playable video URL from an episode's watch page
///
/// A nested `<source>` wins over the `<video>` element's own `src`. Pages
/// without either (unpublished or region-locked episodes) produce a
/// `StreamInfo` with no URL rather than an error.
pub fn parse_stream(
    document: &Html,
    content_id: &str,
    episode: &str,
) -> Result<StreamInfo, MarkupError> {
    let root = document.root_element();
    let source_sel = selector(VIDEO_SOURCE)?;
    let video_sel = selector(VIDEO)?;

    let video_url = first_attr(root, &source_sel, "src")
        .filter(|src| !src.is_empty())
        .or_else(|| first_attr(root, &video_sel, "src"))
        .filter(|src| !src.is_empty());

    Ok(StreamInfo {
        content_id: content_id.to_string(),
        episode: episode.to_string(),
        video_url,
    })
}
