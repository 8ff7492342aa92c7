//! Contracts: a sequential registry behind a two-method dispatch surface.

mod call;

use serde_json::Value;

use chronicle_core::config::RegistryConfig;
use chronicle_core::errors::{ChronicleError, ChronicleResult, DispatchError};
use chronicle_core::models::{CausalLoop, ContractResponse, TimelineEvent};
use chronicle_core::traits::ContractRecord;

use crate::registry::SequentialRegistry;

pub use call::ContractCall;

/// Causal loop contract: `register-loop` / `get-loop`.
pub type CausalLoopContract = Contract<CausalLoop>;

/// Timeline integrity contract: `record-event` / `get-event`.
pub type TimelineContract = Contract<TimelineEvent>;

/// A registry of `R` records plus its dispatch surface.
#[derive(Debug, Clone)]
pub struct Contract<R> {
    registry: SequentialRegistry<R>,
    strict_lookup: bool,
}

impl<R: ContractRecord> Contract<R> {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            registry: SequentialRegistry::with_capacity(config.initial_capacity),
            strict_lookup: config.strict_lookup,
        }
    }

    pub fn register(&mut self, record: R) -> u64 {
        let id = self.registry.register(record);
        tracing::debug!(kind = R::KIND, id, "record registered");
        id
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        let record = self.registry.get(id);
        tracing::trace!(kind = R::KIND, id, found = record.is_some(), "record lookup");
        record
    }

    pub fn registry(&self) -> &SequentialRegistry<R> {
        &self.registry
    }

    /// Run a typed call, producing the JSON value a successful response carries:
    /// the new id for `Register`, the record (or `null`) for `Get`.
    pub fn execute(&mut self, call: ContractCall<R>) -> ChronicleResult<Value> {
        match call {
            ContractCall::Register(record) => Ok(Value::from(self.register(record))),
            ContractCall::Get(id) => match self.get(id) {
                Some(record) => Ok(serde_json::to_value(record)?),
                None if self.strict_lookup => Err(ChronicleError::RecordNotFound {
                    kind: R::KIND.to_string(),
                    id,
                }),
                None => Ok(Value::Null),
            },
        }
    }

    /// String-dispatch entry point.
    pub fn call(&mut self, method: &str, args: &[Value]) -> ContractResponse {
        let result = ContractCall::<R>::parse(method, args)
            .map_err(|err| {
                log_rejected(R::KIND, &err);
                ChronicleError::from(err)
            })
            .and_then(|call| self.execute(call));

        match result {
            Ok(value) => ContractResponse::ok(value),
            Err(err) => err.into(),
        }
    }
}

impl<R: ContractRecord> Default for Contract<R> {
    fn default() -> Self {
        Self::new(&RegistryConfig::default())
    }
}

fn log_rejected(kind: &str, err: &DispatchError) {
    match err {
        DispatchError::UnknownMethod { method } => {
            tracing::warn!(kind, method = %method, "unknown contract method");
        }
        DispatchError::InvalidArguments { method, reason } => {
            tracing::warn!(kind, method = %method, reason = %reason, "invalid contract arguments");
        }
    }
}
