use thiserror::Error;

/// Errors that can occur while talking to a recipe or venue backend.
///
/// These never cross the public search surface: the orchestrator logs them
/// and folds every variant into the "not found" outcome. They exist so the
/// adapters can tell a transient failure apart from a clean empty result.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the JSON shape we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A page was fetched but the expected HTML structure was absent
    #[error("Failed to scrape page: {0}")]
    Scrape(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Error building HTTP headers
    #[error("Header parse error: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}
