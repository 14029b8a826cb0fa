use super::*;

use std::cmp::Ordering;

impl Value {
    /// Orders two values of compatible types.
    ///
    /// Identifiers compare by their raw value. Integers compare across widths
    /// and against floats. Enum values order by declaration index. Returns
    /// `None` when either side is null or the types are incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self.unwrap_id(), other.unwrap_id()) {
            (Null, _) | (_, Null) => None,
            (Bool(lhs), Bool(rhs)) => Some(lhs.cmp(rhs)),
            (String(lhs), String(rhs)) => Some(lhs.cmp(rhs)),
            (Date(lhs), Date(rhs)) => Some(lhs.cmp(rhs)),
            (Enum(lhs), Enum(rhs)) => Some(lhs.variant.cmp(&rhs.variant)),
            (F64(lhs), F64(rhs)) => lhs.partial_cmp(rhs),
            (lhs, rhs) => match (lhs.as_i64(), rhs.as_i64()) {
                (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
                _ => lhs.as_f64()?.partial_cmp(&rhs.as_f64()?),
            },
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F64(v) => Some(v),
            // Precision loss above 2^53 is acceptable for ordering
            _ => self.as_i64().map(|v| v as f64),
        }
    }
}

macro_rules! impl_eq {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::$variant(v) if v == other)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other.eq(self)
                }
            }
        )*
    };
}

impl_eq! {
    Bool(bool),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    String(String),
    Date(chrono::NaiveDate),
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(v) if v == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other.eq(self)
    }
}
