use sift::{
    schema::{ColumnId, Schema, TableId, Type},
    search::{Operation, SearchRequest},
    stmt::{Expr, ExprPattern, Select, Value},
    Config, Shaper, Window,
};

use pretty_assertions::assert_eq;
use std::collections::HashMap;

const PRODUCTS: TableId = TableId(0);

fn schema() -> Schema {
    Schema::builder()
        .table("products", |t| {
            t.column("id", Type::Long).primary_key();
            t.column("title", Type::Text);
            t.column("code", Type::Char);
            t.column("stock", Type::Int);
            t.column("payload", Type::Custom("jsonb".into()));
        })
        .table("counters", |t| {
            t.column("id", Type::Long).primary_key();
            t.column("hits", Type::Int);
        })
        .build()
        .unwrap()
}

fn col(schema: &Schema, name: &str) -> ColumnId {
    schema.table(PRODUCTS).column_by_name(name).unwrap().id
}

fn rows(schema: &Schema) -> Vec<HashMap<ColumnId, Value>> {
    let product = |id: i64, title: &str, code: &str, stock: i32| {
        HashMap::from([
            (col(schema, "id"), Value::I64(id)),
            (col(schema, "title"), Value::from(title)),
            (col(schema, "code"), Value::from(code)),
            (col(schema, "stock"), Value::I32(stock)),
            (col(schema, "payload"), Value::Null),
        ])
    };

    vec![
        product(1, "Red Wool Scarf", "SC-1", 12),
        product(2, "Blue Cotton Scarf", "SC-2", 0),
        product(3, "Wool Socks", "SO-7", 42),
        product(4, "Gift Card 12", "GC-12", 999),
    ]
}

fn run(schema: &Schema, request: &SearchRequest) -> Vec<i64> {
    let plan = Shaper::new(schema)
        .shape(Select::new(PRODUCTS), request, Window::Limited)
        .unwrap();

    plan.eval(rows(schema))
        .unwrap()
        .iter()
        .map(|row| match row[&col(schema, "id")] {
            Value::I64(id) => id,
            ref other => panic!("unexpected id {other:?}"),
        })
        .collect()
}

#[test]
fn search_matches_text_columns_by_fragments() {
    let schema = schema();

    assert_eq!(run(&schema, &SearchRequest::new().search("wool")), [1, 3]);
    assert_eq!(run(&schema, &SearchRequest::new().search("red scarf")), [1]);
    assert_eq!(run(&schema, &SearchRequest::new().search("so-")), [3]);
}

#[test]
fn search_compares_numeric_columns_for_equality() {
    let schema = schema();

    // `12` is the stock of product 1 and a fragment of product 4's title
    assert_eq!(run(&schema, &SearchRequest::new().search("12")), [1, 4]);
    assert_eq!(run(&schema, &SearchRequest::new().search("42")), [3]);
}

#[test]
fn search_is_an_or_over_eligible_columns() {
    let schema = schema();
    let plan = Shaper::new(&schema)
        .shape(
            Select::new(PRODUCTS),
            &SearchRequest::new().search("scarf"),
            Window::Limited,
        )
        .unwrap();

    let Some(Expr::Or(or)) = &plan.filter else {
        panic!("expected OR, got {:?}", plan.filter);
    };

    // `title` and `code` match by pattern; `id`, `stock` and `payload` do
    // not coerce `scarf`
    assert_eq!(or.operands.len(), 2);

    let Expr::Pattern(ExprPattern::Like(like)) = &or.operands[0] else {
        panic!("expected LIKE, got {:?}", or.operands[0]);
    };
    assert_eq!(like.expr.as_column(), Some(col(&schema, "title")));
    assert_eq!(*like.pattern, Expr::from("%scarf%"));
    assert_eq!(like.escape, Some('\\'));
    assert!(like.case_insensitive);
}

#[test]
fn search_escapes_user_wildcards() {
    let schema = schema();

    assert_eq!(run(&schema, &SearchRequest::new().search("_")), Vec::<i64>::new());
    assert_eq!(run(&schema, &SearchRequest::new().search("%")), Vec::<i64>::new());
}

#[test]
fn search_uses_configured_escape() {
    let schema = schema();
    let shaper = Shaper::with_config(&schema, Config::new().escape('!'));
    let plan = shaper
        .shape(
            Select::new(PRODUCTS),
            &SearchRequest::new().search("a_b"),
            Window::Limited,
        )
        .unwrap();

    let Some(Expr::Or(or)) = &plan.filter else {
        panic!("expected OR, got {:?}", plan.filter);
    };
    let Expr::Pattern(ExprPattern::Like(like)) = &or.operands[0] else {
        panic!("expected LIKE");
    };
    assert_eq!(*like.pattern, Expr::from("%a!_b%"));
    assert_eq!(like.escape, Some('!'));
}

#[test]
fn empty_search_is_ignored() {
    let schema = schema();
    let plan = Shaper::new(&schema)
        .shape(
            Select::new(PRODUCTS),
            &SearchRequest::new().search(""),
            Window::Limited,
        )
        .unwrap();

    assert_eq!(plan.filter, None);
}

#[test]
fn search_adds_nothing_when_no_column_accepts_the_term() {
    let schema = schema();
    let plan = Shaper::new(&schema)
        .shape(
            Select::new(TableId(1)),
            &SearchRequest::new().search("abc"),
            Window::Limited,
        )
        .unwrap();

    assert_eq!(plan.filter, None);
}

#[test]
fn search_and_filters_intersect() {
    let schema = schema();
    let request = SearchRequest::new()
        .search("scarf")
        .filter("stock", Operation::Greater, "0");

    assert_eq!(run(&schema, &request), [1]);
}

#[test]
fn non_finite_terms_skip_double_columns() {
    let schema = Schema::builder()
        .table("prices", |t| {
            t.column("id", Type::Text).primary_key();
            t.column("amount", Type::Double);
        })
        .build()
        .unwrap();

    for term in ["inf", "NaN", "-Infinity"] {
        let plan = Shaper::new(&schema)
            .shape(Select::new(TableId(0)), &SearchRequest::new().search(term), Window::Unlimited)
            .unwrap();

        let Some(Expr::Pattern(ExprPattern::Like(like))) = &plan.filter else {
            panic!("expected only the text match for {term:?}, got {:?}", plan.filter);
        };
        assert_eq!(like.expr.as_column(), Some(schema.table(TableId(0)).primary_key));
    }
}
