use super::key_set::JoinKeyError;
use crate::{record::Record, value::Value};
use indexmap::IndexMap;

///
/// GroupIndex
///
/// Foreign-key value to ordered group of resolved records. Built once per
/// aggregation during bulk resolution, read during redistribution. Within a
/// group, records keep the order the resolver returned them in.
///

#[derive(Debug, Default)]
pub(in crate::aggregate) struct GroupIndex {
    groups: IndexMap<Value, Vec<Record>>,
}

impl GroupIndex {
    /// Index one resolved record under its foreign-key value.
    ///
    /// A record whose foreign key is absent or `Null` joins no group and is
    /// dropped.
    pub(in crate::aggregate) fn insert(
        &mut self,
        foreign: &str,
        record: Record,
    ) -> Result<(), JoinKeyError> {
        let Some(value) = record.get(foreign) else {
            return Ok(());
        };
        if matches!(value, Value::Null) {
            return Ok(());
        }
        if !value.is_scalar() {
            return Err(JoinKeyError::NonScalar { kind: value.tag() });
        }

        let key = value.clone();
        self.groups.entry(key).or_default().push(record);

        Ok(())
    }

    /// Matched group for one local-key value, or the empty group.
    #[must_use]
    pub(in crate::aggregate) fn group(&self, key: &Value) -> &[Record] {
        self.groups.get(key).map_or(&[], Vec::as_slice)
    }
}

///
/// TESTS
///
