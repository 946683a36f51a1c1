use crate::value::Value;
use derive_more::Deref;
use indexmap::IndexMap;
use serde::Serialize;

///
/// Record
///
/// Ordered, schemaless field map: field name to [`Value`]. Preserves
/// insertion order and serializes identically to a plain map. The engine
/// treats records as opaque beyond the two join fields of each aggregation.
///
/// Mutation is explicit via [`Record::insert`]; `Record` does not expose
/// `DerefMut` to avoid accidental bypass of field-order semantics.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Set one field, returning the previous value if the field existed.
    ///
    /// Overwriting keeps the field's original position; new fields append.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Builder-style [`Record::insert`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Record> for IndexMap<String, Value> {
    fn from(record: Record) -> Self {
        record.0
    }
}

impl<F, V> FromIterator<(F, V)> for Record
where
    F: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (F, V)>>(pairs: I) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// TESTS
///
