use sift::{
    schema::{ColumnId, Schema, TableId, Type},
    search::{SearchRequest, SortOrder},
    stmt::{Expr, Limit, OrderBy, OrderByExpr, Select, Source},
    Config, Shaper, Window,
};

use pretty_assertions::assert_eq;

const USERS: TableId = TableId(0);
const ORDERS: TableId = TableId(1);
const AUDIT: TableId = TableId(2);

fn schema() -> Schema {
    Schema::builder()
        .table("users", |t| {
            t.column("id", Type::id(Type::Long)).primary_key();
            t.column("name", Type::Text);
            t.column("age", Type::Int);
        })
        .table("orders", |t| {
            t.column("number", Type::Long).primary_key();
            t.column("total", Type::Double);
        })
        .table("audit", |t| {
            t.column("id", Type::Long).primary_key();
            t.column("entry", Type::Text);
            t.filterable(Vec::<String>::new());
        })
        .build()
        .unwrap()
}

fn col(schema: &Schema, table: TableId, name: &str) -> ColumnId {
    schema.table(table).column_by_name(name).unwrap().id
}

fn shape(schema: &Schema, request: &SearchRequest, window: Window) -> Select {
    Shaper::new(schema)
        .shape(Select::new(USERS), request, window)
        .unwrap()
}

#[test]
fn empty_request_orders_by_primary_key_only() {
    let schema = schema();
    let plan = shape(&schema, &SearchRequest::new(), Window::Limited);

    assert_eq!(plan.filter, None);
    assert_eq!(
        plan.order_by,
        OrderBy::from(OrderByExpr::asc(Expr::column(col(&schema, USERS, "id"))))
    );
    assert_eq!(plan.limit, None);
}

#[test]
fn sorts_apply_in_order_then_primary_key() {
    let schema = schema();
    let request = SearchRequest::new()
        .sort("age", SortOrder::Desc)
        .sort("nickname", SortOrder::Asc)
        .sort("name", SortOrder::Asc);
    let plan = shape(&schema, &request, Window::Limited);

    assert_eq!(
        plan.order_by,
        OrderBy::from(vec![
            OrderByExpr::desc(Expr::column(col(&schema, USERS, "age"))),
            OrderByExpr::asc(Expr::column(col(&schema, USERS, "name"))),
            OrderByExpr::asc(Expr::column(col(&schema, USERS, "id"))),
        ])
    );
}

#[test]
fn tie_break_uses_primary_table_key_when_joined() {
    let schema = schema();
    let request = SearchRequest::new().sort("Users.age", SortOrder::Asc);
    let plan = Shaper::new(&schema)
        .shape(
            Select::new(Source::join(ORDERS, [USERS])),
            &request,
            Window::Limited,
        )
        .unwrap();

    assert_eq!(
        plan.order_by,
        OrderBy::from(vec![
            OrderByExpr::asc(Expr::column(col(&schema, USERS, "age"))),
            OrderByExpr::asc(Expr::column(col(&schema, ORDERS, "number"))),
        ])
    );
}

#[test]
fn page_size_alone_limits_without_offset() {
    let schema = schema();
    let plan = shape(&schema, &SearchRequest::new().page_size(25), Window::Limited);

    assert_eq!(plan.limit, Some(Limit::new(25)));
}

#[test]
fn page_and_page_size() {
    let schema = schema();
    let plan = shape(
        &schema,
        &SearchRequest::new().page(3).page_size(20),
        Window::Limited,
    );

    assert_eq!(plan.limit, Some(Limit::with_offset(20, 60)));
}

#[test]
fn page_alone_uses_default_page_size() {
    let schema = schema();

    for page in [0, 1, 7] {
        let plan = shape(&schema, &SearchRequest::new().page(page), Window::Limited);
        let limit = plan.limit.unwrap();

        assert_eq!(limit.limit, 10);
        assert_eq!(limit.offset(), u64::from(page) * 10);
    }
}

#[test]
fn default_page_size_is_configurable() {
    let schema = schema();
    let plan = Shaper::with_config(&schema, Config::new().default_page_size(50))
        .shape(
            Select::new(USERS),
            &SearchRequest::new().page(2),
            Window::Limited,
        )
        .unwrap();

    assert_eq!(plan.limit, Some(Limit::with_offset(50, 100)));
}

#[test]
fn unlimited_window_skips_pagination() {
    let schema = schema();
    let request = SearchRequest::new().page(4).page_size(5);
    let plan = shape(&schema, &request, Window::Unlimited);

    assert_eq!(plan.limit, None);
    assert_eq!(plan.order_by.len(), 1);
}

#[test]
fn source_without_eligible_columns_is_left_untouched() {
    let schema = schema();
    let request = SearchRequest::new()
        .search("x")
        .sort("entry", SortOrder::Asc)
        .page(2);

    let query = Select::new(AUDIT);
    let plan = Shaper::new(&schema)
        .shape(query.clone(), &request, Window::Limited)
        .unwrap();

    assert_eq!(plan, query);
    assert!(plan.order_by.is_empty());
}
