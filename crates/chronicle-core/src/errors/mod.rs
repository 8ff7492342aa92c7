mod chronicle_error;
mod dispatch_error;

pub use chronicle_error::{ChronicleError, ChronicleResult};
pub use dispatch_error::DispatchError;
