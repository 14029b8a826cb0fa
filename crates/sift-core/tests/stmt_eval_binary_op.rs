use sift_core::schema::TableId;
use sift_core::stmt::{Expr, Id, Value, ValueEnum};

use chrono::NaiveDate;

fn eval(expr: Expr) -> Value {
    expr.eval_const().unwrap()
}

#[test]
fn eq_and_ne() {
    assert_eq!(eval(Expr::eq(1_i64, 1_i64)), Value::Bool(true));
    assert_eq!(eval(Expr::ne(1_i64, 2_i64)), Value::Bool(true));
    assert_eq!(eval(Expr::eq("a", "b")), Value::Bool(false));
}

#[test]
fn integer_widths_compare_by_value() {
    assert_eq!(eval(Expr::eq(7_i32, 7_i64)), Value::Bool(true));
    assert_eq!(eval(Expr::lt(7_i8, 300_i16)), Value::Bool(true));
    assert_eq!(eval(Expr::ge(2.5_f64, 2_i64)), Value::Bool(true));
}

#[test]
fn dates_are_ordered() {
    let early = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let late = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    assert_eq!(eval(Expr::lt(early, late)), Value::Bool(true));
    assert_eq!(eval(Expr::gt(early, late)), Value::Bool(false));
    assert_eq!(eval(Expr::le(early, early)), Value::Bool(true));
}

#[test]
fn null_never_compares() {
    assert_eq!(eval(Expr::eq(Value::Null, Value::Null)), Value::Bool(false));
    assert_eq!(eval(Expr::ne(Value::Null, 1_i64)), Value::Bool(false));
    assert_eq!(eval(Expr::gt(1_i64, Value::Null)), Value::Bool(false));
}

#[test]
fn ids_compare_with_raw_values() {
    let id = Id::new(TableId(3), 10_i64);
    assert_eq!(eval(Expr::eq(id.clone(), 10_i64)), Value::Bool(true));
    assert_eq!(eval(Expr::gt(id, 5_i64)), Value::Bool(true));
}

#[test]
fn enums_compare_by_variant() {
    let active = ValueEnum::new(0, "Active");
    let banned = ValueEnum::new(1, "Banned");

    assert_eq!(eval(Expr::eq(active.clone(), active.clone())), Value::Bool(true));
    assert_eq!(eval(Expr::lt(active, banned)), Value::Bool(true));
}

#[test]
fn mismatched_types_are_unequal_and_unordered() {
    assert_eq!(eval(Expr::eq("7", 7_i64)), Value::Bool(false));
    assert_eq!(eval(Expr::ne("7", 7_i64)), Value::Bool(true));
    assert_eq!(eval(Expr::gt("7", 7_i64)), Value::Bool(false));
}

#[test]
fn in_list_uses_value_equality() {
    let expr = Expr::in_list(2_i32, Expr::list([1_i64, 2_i64]));
    assert_eq!(eval(expr), Value::Bool(true));

    let expr = Expr::in_list(5_i64, Expr::list(std::iter::empty::<Expr>()));
    assert_eq!(eval(expr), Value::Bool(false));
}

#[test]
fn is_null_and_is_not_null() {
    assert_eq!(eval(Expr::is_null(Value::Null)), Value::Bool(true));
    assert_eq!(eval(Expr::is_null(1_i64)), Value::Bool(false));
    assert_eq!(eval(Expr::is_not_null("x")), Value::Bool(true));
}
