use super::{coerce, pattern, Coercion};
use crate::{
    search::{Filter, Operation},
    Config,
};
use sift_core::{
    schema::Column,
    stmt::{BinaryOp, Expr},
    Error, Result,
};

/// Builds the predicate for one filter against its resolved column.
///
/// Fails only when the operation needs a value and the filter has none.
/// Returns `None` when the value does not coerce or the operation does not
/// apply to the column's kind.
pub(crate) fn filter_predicate(column: &Column, filter: &Filter, config: &Config) -> Result<Option<Expr>> {
    let value = match (&filter.value, filter.operation.requires_value()) {
        (Some(value), true) => value.as_str(),
        (None, true) => {
            return Err(Error::missing_value(
                &filter.column,
                filter.operation.code(),
            ))
        }
        (_, false) => "",
    };

    let lhs = Expr::column(column);

    let expr = match filter.operation {
        Operation::Eq => compare(column, lhs, BinaryOp::Eq, value, config),
        Operation::Neq => compare(column, lhs, BinaryOp::Ne, value, config),
        Operation::Like if column.ty.is_text() => Some(Expr::ilike_escape(
            lhs,
            pattern::contains(value, config.escape),
            config.escape,
        )),
        Operation::Like => compare(column, lhs, BinaryOp::Eq, value, config),
        operation if operation.is_ordering() && !column.ty.is_ordered() => {
            tracing::debug!(
                column = %filter.column,
                operation = %filter.operation,
                "ordering comparison on an unordered column; skipping"
            );
            None
        }
        Operation::Lower => compare(column, lhs, BinaryOp::Lt, value, config),
        Operation::LowerEq => compare(column, lhs, BinaryOp::Le, value, config),
        Operation::Greater => compare(column, lhs, BinaryOp::Gt, value, config),
        Operation::GreaterEq => compare(column, lhs, BinaryOp::Ge, value, config),
        Operation::IsNull => Some(Expr::is_null(lhs)),
        Operation::IsNotNull => Some(Expr::is_not_null(lhs)),
        Operation::In => Some(in_list(column, lhs, value, config)),
    };

    Ok(expr)
}

fn compare(column: &Column, lhs: Expr, op: BinaryOp, raw: &str, config: &Config) -> Option<Expr> {
    match coerce::coerce(column, raw, config) {
        Coercion::Coerced(value) => Some(Expr::binary_op(lhs, op, value)),
        Coercion::Absent => {
            tracing::debug!(column = %column.name, value = raw, "filter value does not coerce; skipping");
            None
        }
    }
}

/// Membership over the comma-separated tokens of `raw` that coerce. An empty
/// surviving set yields a predicate matching nothing.
fn in_list(column: &Column, lhs: Expr, raw: &str, config: &Config) -> Expr {
    let mut items = vec![];

    for token in raw.split(',') {
        match coerce::coerce(column, token, config).into_value() {
            Some(value) => items.push(value),
            None => tracing::debug!(column = %column.name, token, "dropping `in` token that does not coerce"),
        }
    }

    Expr::in_list(lhs, Expr::list(items))
}
