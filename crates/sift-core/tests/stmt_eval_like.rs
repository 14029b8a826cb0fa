use sift_core::schema::TableId;
use sift_core::stmt::{Expr, Id, Value, ValueEnum};

// ---------------------------------------------------------------------------
// Case-sensitive LIKE
// ---------------------------------------------------------------------------

#[test]
fn like_prefix() {
    let expr = Expr::like("hello", "he%");
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn like_is_case_sensitive_by_default() {
    let expr = Expr::like("Hello", "he%");
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));
}

#[test]
fn like_must_match_whole_subject() {
    let expr = Expr::like("hello", "ell");
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));
}

#[test]
fn like_underscore() {
    assert_eq!(
        Expr::like("cat", "_a_").eval_const().unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        Expr::like("cats", "_a_").eval_const().unwrap(),
        Value::Bool(false)
    );
}

// ---------------------------------------------------------------------------
// Case-insensitive LIKE with escape
// ---------------------------------------------------------------------------

#[test]
fn ilike_matches_across_case() {
    let expr = Expr::ilike_escape("Ann Smith", "%ann%smith%", '\\');
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn ilike_escaped_percent_is_literal() {
    let expr = Expr::ilike_escape("100% cotton", "%100\\%%", '\\');
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));

    let expr = Expr::ilike_escape("1000 cotton", "%100\\%%", '\\');
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));
}

#[test]
fn ilike_escaped_underscore_is_literal() {
    let expr = Expr::ilike_escape("snake_case", "%e\\_c%", '\\');
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));

    let expr = Expr::ilike_escape("snakeXcase", "%e\\_c%", '\\');
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));
}

// ---------------------------------------------------------------------------
// Operand kinds
// ---------------------------------------------------------------------------

#[test]
fn like_null_subject_is_false() {
    let expr = Expr::like(Value::Null, "%");
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));
}

#[test]
fn like_looks_through_ids() {
    let expr = Expr::like(Id::new(TableId(0), "usr_42"), "usr\\_%");
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));

    let expr = Expr::ilike_escape(Id::new(TableId(0), "usr_42"), "usr\\_%", '\\');
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn like_matches_enum_by_name() {
    let expr = Expr::like(ValueEnum::new(1, "Banned"), "Ban%");
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn like_on_number_is_an_error() {
    let err = Expr::like(42_i64, "4%").eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}
