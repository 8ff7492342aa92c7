use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::errors::DispatchError;

/// A record type that can be stored in a sequential registry and exposed
/// through a two-method contract.
///
/// The method names are fixed per record type, so one contract instance
/// only ever answers to its own pair.
pub trait ContractRecord: Clone + fmt::Debug + Serialize {
    /// Short label used in logs and not-found errors.
    const KIND: &'static str;
    /// Method name that stores a new record.
    const REGISTER_METHOD: &'static str;
    /// Method name that looks a record up by id.
    const GET_METHOD: &'static str;

    /// Build a record from the positional arguments of a register call.
    /// Trailing arguments beyond the record's fields are ignored.
    fn from_args(args: &[Value]) -> Result<Self, DispatchError>;
}
