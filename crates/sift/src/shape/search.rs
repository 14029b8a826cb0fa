use super::{coerce, pattern, Columns, Coercion};
use crate::Config;
use sift_core::stmt::Expr;

/// The free-text predicate: an OR over every eligible column.
///
/// Text columns match when they contain the term's fragments. Other columns
/// compare for equality with the term coerced to their kind, and are left
/// out when it does not coerce. Returns `None` when no column contributes.
pub(crate) fn search_predicate(columns: &Columns<'_>, term: &str, config: &Config) -> Option<Expr> {
    let mut operands = vec![];

    for column in columns.iter() {
        if column.ty.is_text() {
            operands.push(Expr::ilike_escape(
                Expr::column(column),
                pattern::contains(term, config.escape),
                config.escape,
            ));
            continue;
        }

        match coerce::coerce(column, term, config) {
            Coercion::Coerced(value) => operands.push(Expr::eq(Expr::column(column), value)),
            Coercion::Absent => {
                tracing::trace!(column = %column.name, term, "search term does not coerce")
            }
        }
    }

    if operands.is_empty() {
        None
    } else {
        Some(Expr::or_from_vec(operands))
    }
}
