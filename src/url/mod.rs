//! URL handling module for the scraper
//!
//! This module resolves links found in page markup against the site origin,
//! recovers content identifiers from link query strings, and builds the page
//! URLs each extraction operation fetches.

mod pages;
mod resolve;

// Re-export main functions
pub use pages::{episode_url, home_url, search_url, watch_url};
pub use resolve::{extract_content_id, resolve, CONTENT_ID_PARAM};
