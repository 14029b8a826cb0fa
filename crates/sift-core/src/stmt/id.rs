use super::Value;
use crate::schema::TableId;

use std::fmt;

/// A row identifier: a raw value boxed together with the table it belongs
/// to.
#[derive(Clone, PartialEq)]
pub struct Id {
    /// The table the identifier is associated with.
    table: TableId,

    /// The raw identifier value
    value: Box<Value>,
}

impl Id {
    pub fn new(table: TableId, value: impl Into<Value>) -> Self {
        Self {
            table,
            value: Box::new(value.into()),
        }
    }

    /// The table this identifier belongs to
    pub fn table_id(&self) -> TableId {
        self.table
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        *self.value
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.value {
            Value::String(id) => write!(f, "{id}"),
            Value::I8(id) => write!(f, "{id}"),
            Value::I16(id) => write!(f, "{id}"),
            Value::I32(id) => write!(f, "{id}"),
            Value::I64(id) => write!(f, "{id}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("Id")
            .field(&self.table.0)
            .field(&self.value)
            .finish()
    }
}
