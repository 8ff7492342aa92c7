use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::args;
use crate::errors::DispatchError;
use crate::traits::ContractRecord;

/// A reported causal loop. Severity is stored as given; nothing checks
/// that the described loop actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalLoop {
    pub description: String,
    pub severity: u32,
}

impl CausalLoop {
    pub fn new(description: impl Into<String>, severity: u32) -> Self {
        Self {
            description: description.into(),
            severity,
        }
    }
}

impl ContractRecord for CausalLoop {
    const KIND: &'static str = "causal-loop";
    const REGISTER_METHOD: &'static str = "register-loop";
    const GET_METHOD: &'static str = "get-loop";

    fn from_args(args: &[Value]) -> Result<Self, DispatchError> {
        let method = Self::REGISTER_METHOD;
        Ok(Self {
            description: args::string_arg(method, args, 0, "description")?,
            severity: args::u32_arg(method, args, 1, "severity")?,
        })
    }
}
