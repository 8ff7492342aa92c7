//! # chronicle-core
//!
//! Shared vocabulary for the Chronicle registries: record models, the
//! `ContractRecord` trait, the response envelope, error types,
//! configuration, and tracing setup.

pub mod args;
pub mod config;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

pub use config::ChronicleConfig;
pub use errors::{ChronicleError, ChronicleResult, DispatchError};
pub use models::{CausalLoop, ContractResponse, TimelineEvent};
pub use traits::ContractRecord;
