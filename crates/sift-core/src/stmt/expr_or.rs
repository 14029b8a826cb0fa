use super::Expr;

/// At least one operand must hold. Free-text search matches a row when any
/// searchable column does.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::or_from_vec(vec![lhs.into(), rhs.into()])
    }

    /// Disjunction of `operands`, kept in order. Nested disjunctions are
    /// spliced in place. No operand gives `false`, a single one is returned
    /// as is.
    pub fn or_from_vec(operands: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());

        for operand in operands {
            match operand {
                Self::Or(nested) => flat.extend(nested.operands),
                operand => flat.push(operand),
            }
        }

        match flat.len() {
            0 => false.into(),
            1 => flat.swap_remove(0),
            _ => ExprOr { operands: flat }.into(),
        }
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
