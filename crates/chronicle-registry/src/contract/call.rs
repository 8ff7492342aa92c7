//! Typed form of a string-dispatched contract call.

use serde_json::Value;

use chronicle_core::args;
use chronicle_core::errors::DispatchError;
use chronicle_core::traits::ContractRecord;

/// One operation against a contract of record type `R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall<R> {
    Register(R),
    Get(u64),
}

impl<R: ContractRecord> ContractCall<R> {
    /// Resolve a method name and its positional arguments.
    ///
    /// Only `R::REGISTER_METHOD` and `R::GET_METHOD` are recognized; any
    /// other name is an unknown method whatever the arguments.
    pub fn parse(method: &str, args: &[Value]) -> Result<Self, DispatchError> {
        if method == R::REGISTER_METHOD {
            Ok(Self::Register(R::from_args(args)?))
        } else if method == R::GET_METHOD {
            Ok(Self::Get(args::u64_arg(method, args, 0, "id")?))
        } else {
            Err(DispatchError::unknown_method(method))
        }
    }

    /// The method name this call dispatches as.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Register(_) => R::REGISTER_METHOD,
            Self::Get(_) => R::GET_METHOD,
        }
    }
}
