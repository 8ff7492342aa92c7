//! # chronicle-registry
//!
//! Sequential record registries and the contracts that expose them:
//! causal loops (`register-loop` / `get-loop`) and timeline events
//! (`record-event` / `get-event`).

pub mod contract;
pub mod registry;
pub mod session;

pub use contract::{CausalLoopContract, Contract, ContractCall, TimelineContract};
pub use registry::SequentialRegistry;
pub use session::Session;
