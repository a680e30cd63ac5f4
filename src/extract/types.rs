use serde::{Deserialize, Serialize};

/// Summary of one title as shown in a listing, ranking, or search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentCard {
    pub title: String,

    /// Identifier recovered from the card's link; `None` when the link is missing or malformed
    #[serde(rename = "book_id")]
    pub content_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Human-readable count such as `1.2M`, kept as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,

    #[serde(rename = "episodes", default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<String>,

    /// Position in the trending sidebar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

/// Full description of a title from its watch page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentDetail {
    /// Identifier supplied by the caller
    #[serde(rename = "book_id")]
    pub content_id: String,

    /// Page title with any trailing episode suffix removed
    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,

    pub stats: DetailStats,

    /// Episodes in the order the page lists them
    pub episode_list: Vec<EpisodeEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_episodes: Option<String>,
}

/// One playable episode of a title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeEntry {
    pub episode: i64,

    /// Opaque per-episode id from the button's `data-episode` attribute
    pub id: String,
}

/// Stream location for one episode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamInfo {
    #[serde(rename = "book_id")]
    pub content_id: String,

    pub episode: String,

    /// `None` when the page exposes no playable source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl StreamInfo {
    /// Returns true if a playable source was found
    pub fn has_stream(&self) -> bool {
        self.video_url.is_some()
    }
}
