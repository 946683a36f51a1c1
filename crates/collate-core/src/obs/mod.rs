//! Observability: ephemeral engine telemetry counters.
//!
//! This module does not reach into engine internals; the engine records
//! events as they happen and hosts read snapshots here.

pub(crate) mod metrics;

// re-exports
pub use metrics::{EventOps, EventState};

/// Snapshot the current thread's engine counters.
#[must_use]
pub fn metrics_snapshot() -> EventState {
    metrics::with_state(Clone::clone)
}

/// Reset the current thread's engine counters to zero.
pub fn metrics_reset() {
    metrics::with_state_mut(|state| *state = EventState::default());
}
