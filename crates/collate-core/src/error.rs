use crate::value::ValueTag;
use thiserror::Error as ThisError;

/// Boxed error carried through the resolver passthrough channel.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

///
/// AggregateError
/// Errors surfaced while constructing or traversing an aggregate.
///

#[derive(Debug, ThisError)]
pub enum AggregateError {
    /// Dynamic construction input was not a record sequence.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A join-key field held a value that cannot act as a scalar join key.
    #[error("aggregation '{name}' read a non-scalar ({kind}) join key from field '{field}'")]
    NonScalarJoinKey {
        name: String,
        field: String,
        kind: ValueTag,
    },

    /// Failure raised inside a registered resolver, passed through
    /// unmodified: no wrapping, no context, no retry.
    #[error("{source}")]
    External {
        #[from]
        source: BoxedError,
    },
}

impl AggregateError {
    /// Construct an invalid-input error.
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Adapt a caller error type for the passthrough channel. Intended for
    /// use inside resolver callables.
    #[must_use]
    pub fn external(err: impl Into<BoxedError>) -> Self {
        Self::External { source: err.into() }
    }
}

///
/// TESTS
///
