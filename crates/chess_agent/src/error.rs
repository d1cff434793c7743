use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform rejected {resource}: {reason}")]
    Rejected { resource: String, reason: String },
    #[error("platform unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid agent configuration: {0}")]
    Json(#[from] serde_json::Error),
}
