use super::*;

use chrono::NaiveDate;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// A civil date
    Date(NaiveDate),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// 64-bit floating point
    F64(f64),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// An identifier bound to the table it identifies a row of
    Id(Id),

    /// A list of values of the same type
    List(Vec<Value>),

    /// SQL null; also an optional view field left empty
    #[default]
    Null,

    /// Positional fields, as handed to `View::load`
    Record(ValueRecord),

    /// String value
    String(String),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    /// Strips identifier wrapping, returning the raw value underneath.
    pub fn unwrap_id(&self) -> &Value {
        let mut value = self;
        while let Self::Id(id) = value {
            value = id.value();
        }
        value
    }

    /// Name of the variant, used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::Enum(_) => "Enum",
            Self::F64(_) => "F64",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Id(_) => "Id",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::String(_) => "String",
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(value.clone())
                }
            }
        )*
    };
}

impl_from! {
    Bool(bool),
    Date(NaiveDate),
    Enum(ValueEnum),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Id(Id),
    Record(ValueRecord),
    String(String),
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
