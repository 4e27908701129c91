use thiserror::Error;

/// Error type that captures signup wizard failures.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Unknown plan: `{0}`")]
    UnknownPlan(String),
    #[error("Unknown add-on: `{0}`")]
    UnknownAddon(String),
}
