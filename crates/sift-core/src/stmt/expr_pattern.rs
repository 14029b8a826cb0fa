use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ExprPattern {
    Like(ExprLike),
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}
