//! Client module for fetching and extracting site pages
//!
//! This module contains:
//! - the [`Fetcher`] seam and its HTTP implementation
//! - [`DramaboxClient`], which runs the five extraction operations

mod fetcher;
mod scrape;

pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use scrape::DramaboxClient;
