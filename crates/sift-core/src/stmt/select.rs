use super::*;
use crate::schema::TableId;

/// A query plan over one or more joined tables.
///
/// The plan is data: building one never touches storage. The shaping layer
/// extends an existing `Select` with search, filter, ordering and pagination
/// clauses; an executor (or [`Select::eval`]) runs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The tables the query reads from
    pub source: Source,

    /// Rows must satisfy this predicate
    pub filter: Option<Expr>,

    /// Ordering of the result set, in priority order
    pub order_by: OrderBy,

    /// Window over the ordered result set
    pub limit: Option<Limit>,
}

/// The tables a query reads from. The first one is the primary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub tables: Vec<TableId>,
}

impl Select {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            source: source.into(),
            filter: None,
            order_by: OrderBy::default(),
            limit: None,
        }
    }

    /// Adds `expr` to the filter with AND, after any existing predicate.
    pub fn and_filter(&mut self, expr: impl Into<Expr>) {
        let expr = expr.into();

        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr,
        });
    }

    pub fn order_by(&mut self, expr: impl Into<OrderByExpr>) {
        self.order_by.push(expr);
    }

    pub fn primary_table(&self) -> Option<TableId> {
        self.source.tables.first().copied()
    }
}

impl Source {
    pub fn table(table: TableId) -> Self {
        Self {
            tables: vec![table],
        }
    }

    /// The primary table joined with `others`, in that order.
    pub fn join(table: TableId, others: impl IntoIterator<Item = TableId>) -> Self {
        let mut tables = vec![table];
        tables.extend(others);
        Self { tables }
    }
}

impl From<TableId> for Source {
    fn from(value: TableId) -> Self {
        Self::table(value)
    }
}

impl From<Vec<TableId>> for Source {
    fn from(tables: Vec<TableId>) -> Self {
        Self { tables }
    }
}
