use super::DispatchError;

/// Top-level error type for the Chronicle registries.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum ChronicleError {
    #[error("record not found: {kind} {id}")]
    RecordNotFound { kind: String, id: u64 },

    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

/// Convenience type alias.
pub type ChronicleResult<T> = Result<T, ChronicleError>;
