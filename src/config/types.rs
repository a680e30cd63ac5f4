use serde::Deserialize;

/// Origin of the scraped site
pub const DEFAULT_BASE_URL: &str = "https://dramabox.web.id";

/// Locale requested on search and watch pages
pub const DEFAULT_LOCALE: &str = "in";

/// Desktop browser user agent; the site serves different markup to unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for the scraper
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Origin every relative link is resolved against (no trailing slash)
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Value of the `lang` query parameter
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// Outbound request configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HttpConfig {
    /// User agent sent verbatim on every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            locale: default_locale(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl SiteConfig {
    /// Builds a site configuration for another origin, keeping the default locale
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            locale: default_locale(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
