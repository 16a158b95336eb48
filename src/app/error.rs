use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream feed API returned {status} for {endpoint}")]
    UpstreamStatus { endpoint: String, status: u16 },

    #[error("Malformed upstream response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing Feedbin credentials (set FEEDBIN_USER/FEEDBIN_PASS or [feedbin] in config)")]
    MissingCredentials,

    #[error("Extraction error: {0}")]
    Extraction(String),
}

impl FolioError {
    /// Whether the error came from the Upstream Feed API (network or status).
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UpstreamStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
