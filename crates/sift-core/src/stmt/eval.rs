use crate::{
    stmt::{BinaryOp, ConstInput, Direction, Expr, ExprLike, ExprPattern, Input, Select, Value},
    Result,
};

use std::cmp::Ordering;

impl Expr {
    pub fn eval(&self, input: impl Input) -> Result<Value> {
        self.eval_ref(&input)
    }

    /// Evaluates a predicate. A null result counts as `false`.
    pub fn eval_bool(&self, input: impl Input) -> Result<bool> {
        self.eval_ref_bool(&input)
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(ConstInput)
    }

    fn eval_ref(&self, input: &impl Input) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                debug_assert!(!expr_and.operands.is_empty());

                for operand in &expr_and.operands {
                    if !operand.eval_ref_bool(input)? {
                        return Ok(false.into());
                    }
                }

                Ok(true.into())
            }
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval_ref(input)?;
                let rhs = expr_binary_op.rhs.eval_ref(input)?;

                Ok(cmp_binary(expr_binary_op.op, &lhs, &rhs).into())
            }
            Expr::Column(expr_column) => input.column(expr_column.column).ok_or_else(|| {
                crate::Error::expression_evaluation_failed(format!(
                    "column {:?} is not present in the input row",
                    expr_column.column
                ))
            }),
            Expr::InList(expr_in_list) => {
                let needle = expr_in_list.expr.eval_ref(input)?;
                let list = expr_in_list.list.eval_ref(input)?;

                let Value::List(items) = list else {
                    return Err(crate::Error::expression_evaluation_failed(
                        "InList right-hand side must evaluate to a list",
                    ));
                };

                Ok(items
                    .iter()
                    .any(|item| cmp_binary(BinaryOp::Eq, &needle, item))
                    .into())
            }
            Expr::IsNull(expr_is_null) => {
                let value = expr_is_null.expr.eval_ref(input)?;
                Ok((value.is_null() != expr_is_null.negate).into())
            }
            Expr::List(exprs) => {
                let mut ret = vec![];

                for expr in &exprs.items {
                    ret.push(expr.eval_ref(input)?);
                }

                Ok(Value::List(ret))
            }
            Expr::Or(expr_or) => {
                debug_assert!(!expr_or.operands.is_empty());

                for operand in &expr_or.operands {
                    if operand.eval_ref_bool(input)? {
                        return Ok(true.into());
                    }
                }

                Ok(false.into())
            }
            Expr::Pattern(ExprPattern::Like(expr_like)) => expr_like.eval_ref(input),
            Expr::Value(value) => Ok(value.clone()),
        }
    }

    fn eval_ref_bool(&self, input: &impl Input) -> Result<bool> {
        match self.eval_ref(input)? {
            Value::Bool(ret) => Ok(ret),
            Value::Null => Ok(false),
            _ => Err(crate::Error::expression_evaluation_failed(
                "expected boolean value",
            )),
        }
    }
}

impl ExprLike {
    fn eval_ref(&self, input: &impl Input) -> Result<Value> {
        let value = self.expr.eval_ref(input)?;
        let pattern = self.pattern.eval_ref(input)?;

        let (subject, pattern) = match (value.unwrap_id(), &pattern) {
            (Value::Null, _) | (_, Value::Null) => return Ok(false.into()),
            (Value::String(subject), Value::String(pattern)) => (subject, pattern),
            (Value::Enum(subject), Value::String(pattern)) => (&subject.name, pattern),
            (value, _) => {
                return Err(crate::Error::expression_evaluation_failed(format!(
                    "LIKE requires a string operand, got {}",
                    value.variant_name()
                )))
            }
        };

        let tokens = tokenize(pattern, self.escape);
        Ok(like_match(subject, &tokens, self.case_insensitive).into())
    }
}

impl Select {
    /// Runs the plan against an in-memory row set.
    ///
    /// Rows are filtered, stably sorted by each ordering entry in turn and
    /// then windowed by the limit. Nulls sort before every other value in
    /// ascending order.
    pub fn eval<I: Input>(&self, rows: impl IntoIterator<Item = I>) -> Result<Vec<I>> {
        let mut keyed = vec![];

        for row in rows {
            if let Some(filter) = &self.filter {
                if !filter.eval_ref_bool(&row)? {
                    continue;
                }
            }

            let mut key = Vec::with_capacity(self.order_by.len());
            for order_by_expr in self.order_by.iter() {
                key.push(order_by_expr.expr.eval_ref(&row)?);
            }

            keyed.push((key, row));
        }

        keyed.sort_by(|(lhs, _), (rhs, _)| {
            for ((lhs, rhs), order_by_expr) in lhs.iter().zip(rhs).zip(self.order_by.iter()) {
                let ordering = cmp_sort_key(lhs, rhs);
                let ordering = match order_by_expr.order {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                };

                if ordering.is_ne() {
                    return ordering;
                }
            }

            Ordering::Equal
        });

        let rows = keyed.into_iter().map(|(_, row)| row);

        Ok(match &self.limit {
            Some(limit) => rows
                .skip(usize::try_from(limit.offset()).unwrap_or(usize::MAX))
                .take(usize::try_from(limit.limit).unwrap_or(usize::MAX))
                .collect(),
            None => rows.collect(),
        })
    }
}

/// Null on either side makes every comparison false. Values of incomparable
/// types are unequal and unordered.
fn cmp_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> bool {
    if lhs.is_null() || rhs.is_null() {
        return false;
    }

    match lhs.compare(rhs) {
        Some(ordering) => op.holds(ordering),
        None => match op {
            BinaryOp::Eq => lhs == rhs,
            BinaryOp::Ne => lhs != rhs,
            _ => false,
        },
    }
}

fn cmp_sort_key(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs.is_null(), rhs.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => lhs.compare(rhs).unwrap_or(Ordering::Equal),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    /// `%`
    Any,

    /// `_`
    One,

    Literal(char),
}

fn tokenize(pattern: &str, escape: Option<char>) -> Vec<Token> {
    let mut tokens = vec![];
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        let token = match ch {
            ch if Some(ch) == escape => Token::Literal(chars.next().unwrap_or(ch)),
            '%' => Token::Any,
            '_' => Token::One,
            ch => Token::Literal(ch),
        };

        tokens.push(token);
    }

    tokens
}

/// Wildcard match, backtracking to the most recent `%` on mismatch.
fn like_match(subject: &str, tokens: &[Token], case_insensitive: bool) -> bool {
    let subject: Vec<char> = subject.chars().collect();

    let eq = |a: char, b: char| {
        if case_insensitive {
            a.to_lowercase().eq(b.to_lowercase())
        } else {
            a == b
        }
    };

    let (mut s, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while s < subject.len() {
        match tokens.get(t) {
            Some(Token::Any) => {
                backtrack = Some((t, s));
                t += 1;
            }
            Some(Token::One) => {
                s += 1;
                t += 1;
            }
            Some(Token::Literal(ch)) if eq(*ch, subject[s]) => {
                s += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((any_t, any_s)) => {
                    backtrack = Some((any_t, any_s + 1));
                    t = any_t + 1;
                    s = any_s + 1;
                }
                None => return false,
            },
        }
    }

    tokens[t..].iter().all(|token| *token == Token::Any)
}
