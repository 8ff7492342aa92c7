/// Dispatch subsystem errors: failures turning a method name and a
/// positional argument list into a typed contract call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The method name is not one the contract recognizes.
    /// The message is fixed; the offending name is kept for logging.
    #[error("Unknown method")]
    UnknownMethod { method: String },

    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments { method: String, reason: String },
}

impl DispatchError {
    pub fn unknown_method(method: &str) -> Self {
        Self::UnknownMethod {
            method: method.to_string(),
        }
    }

    pub fn invalid_arguments(method: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            method: method.to_string(),
            reason: reason.into(),
        }
    }
}
