use super::LazyCollection;
use sift_core::stmt::Value;

use indexmap::IndexMap;

/// A loaded entity: named properties, some of which may be nested records
/// or lazily loaded collections.
#[derive(Debug, Clone, Default)]
pub struct Record {
    properties: IndexMap<String, Property>,
}

#[derive(Debug, Clone)]
pub enum Property {
    /// A scalar, possibly wrapped in an identifier
    Value(Value),

    /// A to-one association
    Record(Record),

    /// A to-many association
    Collection(LazyCollection),
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `property`, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, property: impl Into<Property>) -> Self {
        self.insert(name, property);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, property: impl Into<Property>) {
        self.properties.insert(name.into(), property.into());
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(name, property)| (name.as_str(), property))
    }
}

impl Property {
    /// Returns `true` for a `Null` value, which the mapper treats like a
    /// missing property.
    pub fn is_null(&self) -> bool {
        matches!(self, Property::Value(Value::Null))
    }
}

impl From<Value> for Property {
    fn from(value: Value) -> Self {
        Property::Value(value)
    }
}

impl From<Record> for Property {
    fn from(record: Record) -> Self {
        Property::Record(record)
    }
}

impl From<LazyCollection> for Property {
    fn from(collection: LazyCollection) -> Self {
        Property::Collection(collection)
    }
}

macro_rules! impl_from_value {
    ( $($ty:ty),* $(,)? ) => {
        $(
            impl From<$ty> for Property {
                fn from(value: $ty) -> Self {
                    Property::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    f64,
    String,
    &str,
    chrono::NaiveDate,
    sift_core::stmt::Id,
);
