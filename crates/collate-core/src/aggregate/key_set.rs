use crate::{
    error::AggregateError,
    value::{Value, ValueTag},
};
use indexmap::IndexSet;

///
/// JoinKeyError
///
/// JoinKeyError reports a value that cannot act as a scalar join key. The
/// engine attaches the aggregation name and field when converting to the
/// public error surface.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(in crate::aggregate) enum JoinKeyError {
    NonScalar { kind: ValueTag },
}

impl JoinKeyError {
    /// Convert one join-key failure into the public error surface.
    pub(in crate::aggregate) fn into_aggregate_error(self, name: &str, field: &str) -> AggregateError {
        match self {
            Self::NonScalar { kind } => AggregateError::NonScalarJoinKey {
                name: name.to_string(),
                field: field.to_string(),
                kind,
            },
        }
    }
}

///
/// KeySet
///
/// Insertion-ordered set of distinct scalar join values gathered during the
/// key-collection phase. The resolver receives the keys in first-seen order.
///

#[derive(Debug, Default)]
pub(in crate::aggregate) struct KeySet {
    distinct: IndexSet<Value>,
}

impl KeySet {
    /// Observe one local-key value; returns true when it was newly distinct.
    ///
    /// `Null` behaves like an absent field and contributes nothing.
    pub(in crate::aggregate) fn insert(&mut self, value: &Value) -> Result<bool, JoinKeyError> {
        if matches!(value, Value::Null) {
            return Ok(false);
        }
        if !value.is_scalar() {
            return Err(JoinKeyError::NonScalar { kind: value.tag() });
        }

        Ok(self.distinct.insert(value.clone()))
    }

    /// True when no base record contributed a key. The bulk lookup is
    /// skipped entirely in that case.
    #[must_use]
    pub(in crate::aggregate) fn is_empty(&self) -> bool {
        self.distinct.is_empty()
    }

    /// Hand over the distinct keys in first-seen order.
    #[must_use]
    pub(in crate::aggregate) fn into_keys(self) -> Vec<Value> {
        self.distinct.into_iter().collect()
    }
}

///
/// TESTS
///
