use super::{BinaryOp, Expr};

/// `lhs <op> rhs`. The shaper always puts the column on the left and the
/// coerced request value on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

macro_rules! comparisons {
    ( $( $name:ident => $op:ident ),* $(,)? ) => {
        impl Expr {
            $(
                pub fn $name(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
                    Self::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    eq => Eq,
    ne => Ne,
    lt => Lt,
    le => Le,
    gt => Gt,
    ge => Ge,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Self::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }
}
