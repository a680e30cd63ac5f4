//! Extraction engine turning page markup into typed records
//!
//! Each extractor is a pure function over a parsed [`scraper::Html`]
//! document:
//! - listing cards from the front page grid and from search results
//! - ranked cards from the trending sidebar
//! - title details with the episode list from a watch page
//! - the playable video URL from an episode's watch page
//!
//! Missing optional fields never fail an extraction; they come back as `None`.

mod detail;
mod dom;
mod listing;
mod ranking;
mod stream;
mod types;

pub use detail::{clean_title, parse_detail, parse_episode_label};
pub use dom::label_value;
pub use listing::{parse_latest, parse_search_results};
pub use ranking::parse_trending;
pub use stream::parse_stream;
pub use types::{ContentCard, ContentDetail, DetailStats, EpisodeEntry, StreamInfo};
