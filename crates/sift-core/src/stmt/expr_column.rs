use super::Expr;
use crate::schema::{Column, ColumnId};

/// References a column of one of the query's source tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprColumn {
    pub column: ColumnId,
}

impl Expr {
    pub fn column(column: impl Into<ColumnId>) -> Self {
        ExprColumn {
            column: column.into(),
        }
        .into()
    }

    pub fn as_column(&self) -> Option<ColumnId> {
        match self {
            Self::Column(expr) => Some(expr.column),
            _ => None,
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}

impl From<ColumnId> for ExprColumn {
    fn from(column: ColumnId) -> Self {
        Self { column }
    }
}

impl From<&Column> for ExprColumn {
    fn from(column: &Column) -> Self {
        Self { column: column.id }
    }
}
