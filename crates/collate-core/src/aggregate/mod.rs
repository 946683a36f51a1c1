//! Module: aggregate
//! Responsibility: the three-phase aggregation engine and its fluent surface.
//! Does not own: bulk lookups; those arrive as caller-supplied [`Resolve`]
//! capabilities and stay opaque to the engine.

mod group_index;
mod iter;
mod key_set;


use crate::{error::AggregateError, obs::metrics, record::Record, value::Value};
use group_index::GroupIndex;
use indexmap::IndexMap;
use key_set::KeySet;
use std::cell::RefCell;

// re-exports
pub use iter::AggregateIter;

///
/// Resolve
///
/// Bulk-lookup capability for one aggregation. Called at most once per
/// traversal with the full distinct join-key set, never once per base
/// record. Implemented for free by closures returning any record iterable,
/// including the materialized output of a nested [`Aggregate`].
///

pub trait Resolve {
    fn resolve(&self, keys: &[Value]) -> Result<Vec<Record>, AggregateError>;
}

impl<F, I> Resolve for F
where
    F: Fn(&[Value]) -> Result<I, AggregateError>,
    I: IntoIterator<Item = Record>,
{
    fn resolve(&self, keys: &[Value]) -> Result<Vec<Record>, AggregateError> {
        Ok(self(keys)?.into_iter().collect())
    }
}

///
/// KeyMap
///
/// Join-field pair for one aggregation: the field read from each base
/// record and the field read from each resolved record.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyMap {
    local: String,
    foreign: String,
}

impl KeyMap {
    #[must_use]
    pub fn new(local: impl Into<String>, foreign: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            foreign: foreign.into(),
        }
    }

    /// Field read from each base record.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Field read from each resolved record.
    #[must_use]
    pub fn foreign(&self) -> &str {
        &self.foreign
    }
}

impl From<(&str, &str)> for KeyMap {
    fn from((local, foreign): (&str, &str)) -> Self {
        Self::new(local, foreign)
    }
}

///
/// CollectSpec
///
/// One registered aggregation: the join-field pair plus its resolver. The
/// output field name is the spec's key in the registration table.
///

struct CollectSpec {
    keys: KeyMap,
    resolver: Box<dyn Resolve>,
}

///
/// Source
///
/// Base-record source: a one-shot stream until the first traversal drains
/// it into the reusable ordered buffer.
///

enum Source {
    Stream(Box<dyn Iterator<Item = Record>>),
    Buffered(Vec<Record>),
}

impl Source {
    // Empty until the first traversal drains the stream.
    fn records(&self) -> &[Record] {
        match self {
            Self::Buffered(records) => records,
            Self::Stream(_) => &[],
        }
    }
}

///
/// Aggregate
///
/// Lazy record aggregator. Owns a buffered base sequence and an ordered,
/// name-keyed table of aggregations; each traversal gathers the distinct
/// join keys per aggregation, performs one bulk lookup each, and re-emits
/// every base record augmented with its matched groups.
///
/// Traversals are independent: re-iterating re-runs every phase from the
/// buffer and re-invokes every resolver. Nothing is cached across them.
///

pub struct Aggregate {
    source: RefCell<Source>,
    specs: IndexMap<String, CollectSpec>,
}

impl std::fmt::Debug for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregate")
            .field("specs", &self.specs.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Aggregate {
    /// Create an aggregate over a finite record sequence.
    ///
    /// The sequence may be one-shot; it is consumed at most once, on the
    /// first traversal.
    #[must_use]
    pub fn of<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
        I::IntoIter: 'static,
    {
        Self {
            source: RefCell::new(Source::Stream(Box::new(records.into_iter()))),
            specs: IndexMap::new(),
        }
    }

    /// Register one named aggregation.
    ///
    /// `name` becomes the derived field appended to every emitted record.
    /// Re-registering a name replaces the earlier spec and keeps its field
    /// position. The resolver is not validated here; failures surface on
    /// traversal.
    #[must_use]
    pub fn collect<R>(mut self, name: impl Into<String>, keys: impl Into<KeyMap>, resolver: R) -> Self
    where
        R: Resolve + 'static,
    {
        self.specs.insert(
            name.into(),
            CollectSpec {
                keys: keys.into(),
                resolver: Box::new(resolver),
            },
        );
        self
    }

    /// Lazy traversal. Key collection and bulk resolution run ahead of the
    /// first emitted record; emission itself is lazy and supports early
    /// termination.
    #[must_use]
    pub fn iter(&self) -> AggregateIter<'_> {
        AggregateIter::new(self)
    }

    /// Materialize the full traversal in base order.
    pub fn all(&self) -> Result<Vec<Record>, AggregateError> {
        self.iter().collect()
    }

    // ------------------------------------------------------------------
    // Phase internals
    // ------------------------------------------------------------------

    // Drain the source into the ordered buffer on first traversal; later
    // traversals reuse the buffer untouched.
    fn buffer_base(&self) {
        let mut source = self.source.borrow_mut();
        if let Source::Stream(stream) = &mut *source {
            let drained: Vec<Record> = stream.by_ref().collect();
            metrics::record_records_buffered(drained.len());
            *source = Source::Buffered(drained);
        }
    }

    // Run key collection and bulk resolution for one traversal. Returns one
    // group index per aggregation, in registration order. Any failure here
    // aborts the traversal before the first record is emitted.
    fn resolve_groups(&self) -> Result<Vec<GroupIndex>, AggregateError> {
        metrics::record_iteration();

        // Phase 1: buffer the base sequence and gather the distinct local
        // keys per aggregation. Absent and null keys contribute nothing.
        self.buffer_base();
        let mut key_sets: Vec<KeySet> = (0..self.specs.len()).map(|_| KeySet::default()).collect();
        {
            let source = self.source.borrow();
            for record in source.records() {
                for (slot, (name, spec)) in self.specs.iter().enumerate() {
                    let Some(value) = record.get(spec.keys.local()) else {
                        continue;
                    };
                    key_sets[slot]
                        .insert(value)
                        .map_err(|err| err.into_aggregate_error(name, spec.keys.local()))?;
                }
            }
        }

        // Phase 2: one bulk lookup per aggregation with a non-empty key
        // set; an empty set skips the resolver and leaves the index empty.
        let mut indexes = Vec::with_capacity(self.specs.len());
        for (key_set, (name, spec)) in key_sets.into_iter().zip(self.specs.iter()) {
            let mut index = GroupIndex::default();
            if !key_set.is_empty() {
                let keys = key_set.into_keys();
                metrics::record_resolver_call();
                for record in spec.resolver.resolve(&keys)? {
                    index
                        .insert(spec.keys.foreign(), record)
                        .map_err(|err| err.into_aggregate_error(name, spec.keys.foreign()))?;
                }
            }
            indexes.push(index);
        }

        Ok(indexes)
    }

    // Phase 3: shallow-copy the buffered record at `position` and append
    // one derived field per aggregation, in registration order. Returns
    // `None` past the end of the buffer.
    fn emit_at(&self, indexes: &[GroupIndex], position: usize) -> Option<Record> {
        let record = {
            let source = self.source.borrow();
            source.records().get(position)?.clone()
        };

        let mut augmented = record;
        for (index, (name, spec)) in indexes.iter().zip(self.specs.iter()) {
            let group = augmented
                .get(spec.keys.local())
                .map_or(&[] as &[Record], |value| index.group(value));
            let derived: Vec<Value> = group.iter().cloned().map(Value::Record).collect();
            augmented.insert(name.clone(), Value::List(derived));
        }
        metrics::record_emission(indexes.len());

        Some(augmented)
    }
}

impl TryFrom<Value> for Aggregate {
    type Error = AggregateError;

    /// Build an aggregate from a dynamic value. The value must be a list
    /// whose elements are all records.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let tag = value.tag();
        let Value::List(items) = value else {
            return Err(AggregateError::invalid_input(format!(
                "expected a record list, found {tag}"
            )));
        };

        let mut records = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            let item_tag = item.tag();
            let Value::Record(record) = item else {
                return Err(AggregateError::invalid_input(format!(
                    "base element at position {position} is not a record, found {item_tag}"
                )));
            };
            records.push(record);
        }

        Ok(Self::of(records))
    }
}
