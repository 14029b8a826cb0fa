use super::*;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

impl OrderBy {
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn push(&mut self, expr: impl Into<OrderByExpr>) {
        self.exprs.push(expr.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderByExpr> {
        self.exprs.iter()
    }
}

impl From<Vec<OrderByExpr>> for OrderBy {
    fn from(exprs: Vec<OrderByExpr>) -> Self {
        Self { exprs }
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}
