use super::*;

/// A predicate or operand in a query plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Conjunction; filters are joined with it
    And(ExprAnd),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// References a column of a table in the query source
    Column(ExprColumn),

    /// Membership in a list
    InList(ExprInList),

    /// Nullability test
    IsNull(ExprIsNull),

    /// Right-hand side of a membership test
    List(ExprList),

    /// Disjunction; the per-column search matches are joined with it
    Or(ExprOr),

    /// Pattern match, as built for `like` filters and text search
    Pattern(ExprPattern),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    /// Whether this is the constant `true`, the identity of a conjunction.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    pub fn is_binary_op(&self) -> bool {
        matches!(self, Self::BinaryOp(..))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_value {
    ( $($ty:ty),* $(,)? ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    f64,
    String,
    &str,
    chrono::NaiveDate,
    Id,
    ValueEnum,
);
