use super::*;

/// Tests if the string expression matches `pattern`.
///
/// `%` matches any run of characters and `_` matches exactly one. When an
/// escape character is set, it makes the character following it literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,

    /// Character that makes the next pattern character literal
    pub escape: Option<char>,

    /// Compare without regard to letter case
    pub case_insensitive: bool,
}

impl Expr {
    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            escape: None,
            case_insensitive: false,
        }
        .into()
    }

    /// Case-insensitive LIKE with an explicit escape character.
    pub fn ilike_escape(expr: impl Into<Self>, pattern: impl Into<Self>, escape: char) -> Self {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            escape: Some(escape),
            case_insensitive: true,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Pattern(value.into())
    }
}

impl From<ExprLike> for ExprPattern {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
