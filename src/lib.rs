//! DramaBox scraper: structured access to a drama streaming site
//!
//! This crate fetches pages from the DramaBox web front end and turns their
//! markup into typed records: latest and trending listings, search results,
//! title details with their episode list, and per-episode stream URLs.

pub mod api;
pub mod client;
pub mod config;
pub mod extract;
pub mod url;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Caller-supplied input was rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// A page could not be fetched or queried
    #[error("Failed to {context}: {source}")]
    Extraction {
        context: String,
        source: ExtractionCause,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScraperError {
    /// Wraps an extraction failure with the operation it interrupted
    pub fn extraction(context: impl Into<String>, cause: impl Into<ExtractionCause>) -> Self {
        Self::Extraction {
            context: context.into(),
            source: cause.into(),
        }
    }

    /// Returns true for input-validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP-style status a routing layer should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }
}

/// Underlying reason for an extraction failure
#[derive(Debug, Error)]
pub enum ExtractionCause {
    #[error("Network Error: {0}")]
    Network(#[from] FetchError),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

/// Errors raised by the document fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("Request to {url} failed with status code {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },
}

/// Errors raised while querying a parsed document
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::{DramaboxClient, Fetcher, HttpFetcher};
pub use config::Config;
pub use extract::{ContentCard, ContentDetail, DetailStats, EpisodeEntry, StreamInfo};
pub use crate::url::{extract_content_id, resolve};
