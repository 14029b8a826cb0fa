use super::Expr;

/// Every operand must hold. Filters narrow a query by joining this list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::and_from_vec(vec![lhs.into(), rhs.into()])
    }

    /// Conjunction of `operands`, kept in order.
    ///
    /// Nested conjunctions are spliced in place and `true` operands dropped.
    /// With nothing left the result is `true`; a single operand is returned
    /// as is.
    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());

        for operand in operands {
            match operand {
                Self::And(nested) => flat.extend(nested.operands),
                operand if operand.is_true() => {}
                operand => flat.push(operand),
            }
        }

        match flat.len() {
            0 => true.into(),
            1 => flat.swap_remove(0),
            _ => ExprAnd { operands: flat }.into(),
        }
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_operands_are_dropped() {
        let lhs = Expr::eq(1_i64, 1_i64);

        assert_eq!(Expr::and(true, lhs.clone()), lhs);
        assert_eq!(Expr::and_from_vec(vec![true.into(), true.into()]), Expr::from(true));
    }
}
