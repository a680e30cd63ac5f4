use crate::extract::dom::{first_attr, label_value, nth_text, own_text, selector, text_of};
use crate::extract::types::{ContentDetail, DetailStats, EpisodeEntry};
use crate::MarkupError;
use scraper::Html;

const VIDEO_TITLE: &str = ".video-title";
const DESCRIPTION: &str = ".video-description";
const THUMBNAIL: &str = r#"meta[itemprop="thumbnailUrl"]"#;
const UPLOAD_DATE: &str = r#"meta[itemprop="uploadDate"]"#;
const FOLLOWERS: &str = ".video-meta span";
const TOTAL_EPISODES: &str = r#"span[itemprop="numberOfEpisodes"]"#;
const EPISODE_BUTTON: &str = ".episodes-grid .episode-btn";

/// Marker the site appends to watch page titles
const EPISODE_SUFFIX: &str = "- Episode";

/// Extracts a title's details and episode list from its watch page
///
/// `content_id` is echoed into the result as given; it is not read from the
/// markup.
pub fn parse_detail(document: &Html, content_id: &str) -> Result<ContentDetail, MarkupError> {
    let root = document.root_element();

    let title_sel = selector(VIDEO_TITLE)?;
    let description_sel = selector(DESCRIPTION)?;
    let thumbnail_sel = selector(THUMBNAIL)?;
    let upload_date_sel = selector(UPLOAD_DATE)?;
    let followers_sel = selector(FOLLOWERS)?;
    let total_episodes_sel = selector(TOTAL_EPISODES)?;

    Ok(ContentDetail {
        content_id: content_id.to_string(),
        title: clean_title(&text_of(root, &title_sel)),
        description: text_of(root, &description_sel),
        thumbnail: first_attr(root, &thumbnail_sel, "content"),
        upload_date: first_attr(root, &upload_date_sel, "content"),
        stats: DetailStats {
            followers: label_value(&nth_text(root, &followers_sel, 0)),
            total_episodes: label_value(&text_of(root, &total_episodes_sel)),
        },
        episode_list: parse_episode_list(document)?,
    })
}

/// Strips the episode suffix from a watch page title
///
/// # Examples
///
/// ```
/// use dramabox_scraper::extract::clean_title;
///
/// assert_eq!(clean_title("My Drama - Episode 5"), "My Drama");
/// assert_eq!(clean_title("My Drama"), "My Drama");
/// ```
pub fn clean_title(full_title: &str) -> String {
    full_title
        .split(EPISODE_SUFFIX)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Collects numbered episode buttons in document order
fn parse_episode_list(document: &Html) -> Result<Vec<EpisodeEntry>, MarkupError> {
    let button_sel = selector(EPISODE_BUTTON)?;

    let mut episodes = Vec::new();

    for button in document.select(&button_sel) {
        let label = own_text(button);

        let Some(episode) = parse_episode_label(&label) else {
            tracing::trace!("Skipping episode button with label '{}'", label);
            continue;
        };

        episodes.push(EpisodeEntry {
            episode,
            id: button
                .value()
                .attr("data-episode")
                .unwrap_or_default()
                .to_string(),
        });
    }

    Ok(episodes)
}

/// Reads the episode number from a button label
///
/// Leading whitespace and a single `+` or `-` sign are accepted and parsing
/// stops at the first non-digit, so `"12 VIP"` reads as 12. Labels without a
/// leading digit run, or whose number does not fit an `i64`, yield `None`.
///
/// # Examples
///
/// ```
/// use dramabox_scraper::extract::parse_episode_label;
///
/// assert_eq!(parse_episode_label("3"), Some(3));
/// assert_eq!(parse_episode_label("12 VIP"), Some(12));
/// assert_eq!(parse_episode_label("-3"), Some(-3));
/// assert_eq!(parse_episode_label("abc"), None);
/// ```
pub fn parse_episode_label(label: &str) -> Option<i64> {
    let label = label.trim_start();
    let sign_len = usize::from(label.starts_with(['+', '-']));

    let digits = label[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }

    label[..sign_len + digits].parse().ok()
}
