//! Record models and the contract response envelope.

mod causal_loop;
mod response;
mod timeline_event;

pub use causal_loop::CausalLoop;
pub use response::ContractResponse;
pub use timeline_event::TimelineEvent;
