use super::FieldTy;
use sift_core::{stmt::Value, Error, Result};

use chrono::NaiveDate;

/// A type that can be the field of a view.
///
/// Implemented for primitives, `String`, dates, `Option<T>`, `Vec<T>` and
/// every `#[derive(View)]` type.
pub trait Load: Sized {
    /// `Option<_>` fields may be left empty.
    const OPTIONAL: bool = false;

    /// Describes the field so the mapper knows what conversion to apply.
    fn field_ty() -> FieldTy;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_load_integer {
    ( $( $ty:ty => $name:literal ),* $(,)? ) => {
        $(
            impl Load for $ty {
                fn field_ty() -> FieldTy {
                    FieldTy::Value
                }

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I8(v) => <$ty>::try_from(*v).ok(),
                        Value::I16(v) => <$ty>::try_from(*v).ok(),
                        Value::I32(v) => <$ty>::try_from(*v).ok(),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::Id(id) => return Self::load(id.value().clone()),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, $name))
                }
            }
        )*
    };
}

impl_load_integer! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
}

impl Load for f64 {
    fn field_ty() -> FieldTy {
        FieldTy::Value
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I8(v) => Ok(v.into()),
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Load for bool {
    fn field_ty() -> FieldTy {
        FieldTy::Value
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Load for String {
    fn field_ty() -> FieldTy {
        FieldTy::Value
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Enum(v) => Ok(v.name),
            Value::Id(id) => Self::load(id.into_value()),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Load for NaiveDate {
    fn field_ty() -> FieldTy {
        FieldTy::Value
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "chrono::NaiveDate")),
        }
    }
}

/// Pass-through for fields that keep the raw value.
impl Load for Value {
    fn field_ty() -> FieldTy {
        FieldTy::Value
    }

    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: Load> Load for Option<T> {
    const OPTIONAL: bool = true;

    fn field_ty() -> FieldTy {
        T::field_ty()
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

impl<T: Load> Load for Vec<T> {
    fn field_ty() -> FieldTy {
        FieldTy::List(Box::new(T::field_ty()))
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            _ => Err(Error::type_conversion(value, "Vec")),
        }
    }
}
