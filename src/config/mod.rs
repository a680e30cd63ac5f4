//! Configuration module for the DramaBox scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an empty file (or no file at all) yields a
//! configuration pointing at the public site.
//!
//! # Example
//!
//! ```no_run
//! use dramabox_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("dramabox.toml")).unwrap();
//! println!("Scraping {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, SiteConfig, DEFAULT_BASE_URL, DEFAULT_LOCALE, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
