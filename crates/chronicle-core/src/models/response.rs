use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ChronicleError;

/// Result envelope returned by string-dispatched contract calls.
///
/// Serializes as `{"success": true, "value": ...}` or
/// `{"success": false, "error": "..."}`. A successful lookup of a missing
/// record carries `"value": null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContractResponse {
    pub fn ok(value: Value) -> Self {
        Self {
            success: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            value: None,
            error: Some(message.into()),
        }
    }

    /// The carried value. `Value::Null` for failures and absent records.
    pub fn value(&self) -> &Value {
        self.value.as_ref().unwrap_or(&Value::Null)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<ChronicleError> for ContractResponse {
    fn from(err: ChronicleError) -> Self {
        Self::err(err.to_string())
    }
}
