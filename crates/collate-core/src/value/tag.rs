use std::fmt;

///
/// ValueTag
///
/// Stable discriminant for each value variant. Hashers consume the tag byte
/// ahead of the payload so values of different kinds never collide, and
/// diagnostics use the label to name the offending kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    Text,
    Record,
    List,
}

impl ValueTag {
    pub(crate) const fn to_u8(self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool => 1,
            Self::Int => 2,
            Self::Uint => 3,
            Self::Float => 4,
            Self::Text => 5,
            Self::Record => 6,
            Self::List => 7,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Text => "text",
            Self::Record => "record",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
