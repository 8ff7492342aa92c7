//! Caller-owned lifetime for a pair of contracts.

use chronicle_core::config::ChronicleConfig;

use crate::contract::{CausalLoopContract, TimelineContract};

/// A causal loop contract and a timeline contract that live and die
/// together. Each session starts both counters at 0; dropping it
/// discards every record.
#[derive(Debug, Clone)]
pub struct Session {
    loops: CausalLoopContract,
    timeline: TimelineContract,
}

impl Session {
    pub fn new(config: &ChronicleConfig) -> Self {
        tracing::info!(
            strict_lookup = config.registry.strict_lookup,
            initial_capacity = config.registry.initial_capacity,
            "session opened"
        );
        Self {
            loops: CausalLoopContract::new(&config.registry),
            timeline: TimelineContract::new(&config.registry),
        }
    }

    pub fn loops(&self) -> &CausalLoopContract {
        &self.loops
    }

    pub fn loops_mut(&mut self) -> &mut CausalLoopContract {
        &mut self.loops
    }

    pub fn timeline(&self) -> &TimelineContract {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut TimelineContract {
        &mut self.timeline
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ChronicleConfig::default())
    }
}
