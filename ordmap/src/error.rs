use thiserror::Error;

/// Type alias for Result with `OrderedMapError`
pub type Result<T> = std::result::Result<T, OrderedMapError>;

/// Errors that can occur when encoding or decoding an ordered map
#[derive(Error, Debug)]
pub enum OrderedMapError {
    #[error("keys must be strings when encoding to JSON")]
    KeysMustBeStrings,

    #[error("invalid JSON object: {0}")]
    Json(#[from] serde_json::Error),
}
