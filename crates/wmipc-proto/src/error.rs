/// Errors that can occur while decoding reply or event payloads.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// An event frame's subtype has no known decoder.
    #[error("unknown event type {0}")]
    UnknownEvent(u32),

    /// The JSON payload failed validation for the expected shape.
    #[error("payload did not match the expected shape: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
