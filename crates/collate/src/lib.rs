//! ## Crate layout
//! - `core`: runtime data model, aggregation engine, errors, and
//!   observability counters.
//!
//! The `prelude` module mirrors the surface host programs use; advanced
//! embedders can reach into [`core`] directly.

pub use collate_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use collate_core::{list, record};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        aggregate::{Aggregate, AggregateIter, KeyMap, Resolve},
        error::{AggregateError, BoxedError},
        obs,
        record::Record,
        value::{Value, ValueTag},
    };
    pub use crate::{list, record};
}
