use serde::Serialize;
use std::cell::RefCell;

///
/// Metrics
/// Ephemeral, in-memory counters for engine operations. Advisory only:
/// hosts and tests use them to observe bulk-lookup behavior.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Traversals started
    pub iterations: u64,

    // Bulk lookups actually performed (skipped lookups do not count)
    pub resolver_calls: u64,

    // Rows touched
    pub records_buffered: u64,
    pub records_emitted: u64,
    pub groups_attached: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&state.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&mut state.borrow_mut()))
}

pub(crate) fn record_iteration() {
    with_state_mut(|state| state.ops.iterations = state.ops.iterations.saturating_add(1));
}

pub(crate) fn record_resolver_call() {
    with_state_mut(|state| state.ops.resolver_calls = state.ops.resolver_calls.saturating_add(1));
}

pub(crate) fn record_records_buffered(count: usize) {
    let count = u64::try_from(count).unwrap_or(u64::MAX);
    with_state_mut(|state| {
        state.ops.records_buffered = state.ops.records_buffered.saturating_add(count);
    });
}

pub(crate) fn record_emission(groups_attached: usize) {
    let groups_attached = u64::try_from(groups_attached).unwrap_or(u64::MAX);
    with_state_mut(|state| {
        state.ops.records_emitted = state.ops.records_emitted.saturating_add(1);
        state.ops.groups_attached = state.ops.groups_attached.saturating_add(groups_attached);
    });
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_and_reset() {
        crate::obs::metrics_reset();

        record_iteration();
        record_resolver_call();
        record_records_buffered(3);
        record_emission(2);

        let snapshot = crate::obs::metrics_snapshot();
        assert_eq!(snapshot.ops.iterations, 1);
        assert_eq!(snapshot.ops.resolver_calls, 1);
        assert_eq!(snapshot.ops.records_buffered, 3);
        assert_eq!(snapshot.ops.records_emitted, 1);
        assert_eq!(snapshot.ops.groups_attached, 2);

        crate::obs::metrics_reset();
        assert_eq!(crate::obs::metrics_snapshot(), EventState::default());
    }
}
