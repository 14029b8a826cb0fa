use super::Expr;

/// Nullability test, as built by the `isn` and `isnn` filter operations.
///
/// Kept apart from [`ExprBinaryOp`](super::ExprBinaryOp): comparing against
/// null never holds, while this test does.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    /// `IS NOT NULL` when set
    pub negate: bool,

    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        ExprIsNull::new(expr.into(), false).into()
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        ExprIsNull::new(expr.into(), true).into()
    }
}

impl ExprIsNull {
    fn new(expr: Expr, negate: bool) -> Self {
        Self {
            negate,
            expr: Box::new(expr),
        }
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
