use crate::Config;
use sift_core::{
    schema::{Column, TableId, Type},
    stmt::{Id, Value, ValueEnum},
};

use chrono::NaiveDate;
use std::str::FromStr;

/// Outcome of converting a raw request string to a column's kind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Coercion {
    /// The string does not represent a value of the kind
    Absent,

    Coerced(Value),
}

impl Coercion {
    pub(crate) fn into_value(self) -> Option<Value> {
        match self {
            Coercion::Absent => None,
            Coercion::Coerced(value) => Some(value),
        }
    }
}

/// Coerces `raw` to the kind of `column`.
pub(crate) fn coerce(column: &Column, raw: &str, config: &Config) -> Coercion {
    coerce_ty(&column.ty, column.id.table, raw, config)
}

fn coerce_ty(ty: &Type, table: TableId, raw: &str, config: &Config) -> Coercion {
    match ty {
        Type::Text | Type::Char => Coercion::Coerced(raw.into()),
        Type::Byte => parse::<i8>(raw),
        Type::Short => parse::<i16>(raw),
        Type::Int => parse::<i32>(raw),
        Type::Long => parse::<i64>(raw),
        // `inf` and `nan` parse as f64 but are not request numbers
        Type::Double => match parse::<f64>(raw) {
            Coercion::Coerced(Value::F64(value)) if !value.is_finite() => Coercion::Absent,
            coercion => coercion,
        },
        Type::Date => match NaiveDate::parse_from_str(raw, &config.date_format) {
            Ok(date) => Coercion::Coerced(date.into()),
            Err(_) => Coercion::Absent,
        },
        Type::Enum(ty) => match ty.variant(raw) {
            Some(index) => Coercion::Coerced(ValueEnum::new(index, raw).into()),
            None => Coercion::Absent,
        },
        Type::Transformed(base) => coerce_ty(base, table, raw, config),
        Type::Id(inner) => match coerce_ty(inner, table, raw, config) {
            Coercion::Coerced(value) => Coercion::Coerced(Id::new(table, value).into()),
            Coercion::Absent => Coercion::Absent,
        },
        Type::Custom(_) => Coercion::Absent,
    }
}

fn parse<T>(raw: &str) -> Coercion
where
    T: FromStr,
    Value: From<T>,
{
    match raw.parse::<T>() {
        Ok(value) => Coercion::Coerced(value.into()),
        Err(_) => Coercion::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::schema::ColumnId;

    fn column(ty: Type) -> Column {
        Column {
            id: ColumnId {
                table: TableId(4),
                index: 0,
            },
            name: "c".to_string(),
            ty,
            nullable: false,
            primary_key: false,
        }
    }

    fn coerced(ty: Type, raw: &str) -> Coercion {
        coerce(&column(ty), raw, &Config::default())
    }

    #[test]
    fn text_is_identity() {
        assert_eq!(coerced(Type::Text, "a b"), Coercion::Coerced("a b".into()));
        assert_eq!(coerced(Type::Char, ""), Coercion::Coerced("".into()));
    }

    #[test]
    fn numbers_parse_or_are_absent() {
        assert_eq!(coerced(Type::Int, "42"), Coercion::Coerced(Value::I32(42)));
        assert_eq!(coerced(Type::Long, "-7"), Coercion::Coerced(Value::I64(-7)));
        assert_eq!(coerced(Type::Double, "2.5"), Coercion::Coerced(Value::F64(2.5)));
        assert_eq!(coerced(Type::Int, "abc"), Coercion::Absent);
        assert_eq!(coerced(Type::Byte, "300"), Coercion::Absent);
        assert_eq!(coerced(Type::Short, "300"), Coercion::Coerced(Value::I16(300)));
    }

    #[test]
    fn non_finite_doubles_are_absent() {
        for raw in ["inf", "-Infinity", "NaN", "nan", "1e999"] {
            assert_eq!(coerced(Type::Double, raw), Coercion::Absent, "{raw}");
        }
        assert_eq!(coerced(Type::Double, "1e3"), Coercion::Coerced(Value::F64(1000.0)));
    }

    #[test]
    fn dates_accept_unpadded_fields() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(coerced(Type::Date, "2024-3-5"), Coercion::Coerced(expected.into()));
        assert_eq!(coerced(Type::Date, "2024-03-05"), Coercion::Coerced(expected.into()));
        assert_eq!(coerced(Type::Date, "05/03/2024"), Coercion::Absent);
    }

    #[test]
    fn date_format_is_configurable() {
        let config = Config::new().date_format("%d/%m/%Y");
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        assert_eq!(
            coerce(&column(Type::Date), "05/03/2024", &config),
            Coercion::Coerced(expected.into())
        );
    }

    #[test]
    fn enums_match_declared_variant_names() {
        let ty = Type::enumeration("Status", ["Active", "Banned"]);

        assert_eq!(
            coerced(ty.clone(), "Banned"),
            Coercion::Coerced(ValueEnum::new(1, "Banned").into())
        );
        assert_eq!(coerced(ty, "banned"), Coercion::Absent);
    }

    #[test]
    fn ids_rewrap_with_owning_table() {
        assert_eq!(
            coerced(Type::id(Type::Long), "9"),
            Coercion::Coerced(Id::new(TableId(4), 9_i64).into())
        );
        assert_eq!(coerced(Type::id(Type::Long), "x"), Coercion::Absent);
    }

    #[test]
    fn transformed_coerces_by_base_kind() {
        assert_eq!(
            coerced(Type::transformed(Type::Int), "3"),
            Coercion::Coerced(Value::I32(3))
        );
    }

    #[test]
    fn custom_never_coerces() {
        assert_eq!(coerced(Type::Custom("json".into()), "{}"), Coercion::Absent);
        assert_eq!(Coercion::Absent.into_value(), None);
    }
}
