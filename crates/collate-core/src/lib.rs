//! Core runtime for collate: the value and record model, the aggregation
//! engine, its error taxonomy, and the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

mod macros;

// public exports are one module level down
pub mod aggregate;
pub mod error;
pub mod obs;
pub mod record;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No observability helpers or internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        aggregate::{Aggregate, AggregateIter, KeyMap, Resolve},
        error::AggregateError,
        record::Record,
        value::Value,
    };
}
