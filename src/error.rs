use thiserror::Error;

use crate::platform::PlatformError;

#[derive(Debug, Error)]
pub enum RecopsError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("Candidate {0} has no candidate profile")]
    NoCandidateProfile(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Platform API error: {0}")]
    Platform(#[from] PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
