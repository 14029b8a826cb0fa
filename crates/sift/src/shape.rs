//! Turns a [`SearchRequest`] into clauses of a [`Select`].
//!
//! The shaper resolves request display keys against the query's source
//! tables, builds the free-text and filter predicates, appends ordering
//! (always ending in the primary key) and applies the page window.
//!
//! Problems with individual request values are not errors. A display key
//! that resolves to no column, a value that does not coerce to the column's
//! kind, or an operation that makes no sense for the kind all leave the
//! clause out. Only a missing value for an operation that needs one fails.

mod coerce;
use coerce::Coercion;

mod columns;
use columns::Columns;

mod filter;

mod pattern;

mod search;

use crate::{
    search::{SearchRequest, SortOrder},
    Config,
};
use sift_core::{
    stmt::{Expr, Limit, OrderByExpr, Select},
    Result, Schema,
};

/// Whether shaping applies the request's page window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Apply `page` / `page_size` as offset and limit
    #[default]
    Limited,

    /// Leave the limit alone, e.g. to count every matching row
    Unlimited,
}

/// Shapes queries against one schema.
///
/// A `Shaper` holds no per-request state; one instance may serve any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct Shaper<'a> {
    schema: &'a Schema,
    config: Config,
}

impl<'a> Shaper<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, Config::default())
    }

    pub fn with_config(schema: &'a Schema, config: Config) -> Self {
        Self { schema, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extends `query` with the clauses described by `request`.
    ///
    /// An existing filter on `query` is kept and intersected with the new
    /// predicates. Returns `query` untouched when its source tables expose no
    /// columns, and fails when the source names a table outside the schema.
    pub fn shape(&self, mut query: Select, request: &SearchRequest, window: Window) -> Result<Select> {
        let columns = Columns::new(self.schema, &query.source)?;

        let Some(primary_table) = query.primary_table().filter(|_| !columns.is_empty()) else {
            tracing::debug!("query source exposes no columns; leaving query unshaped");
            return Ok(query);
        };

        if let Some(term) = request.search_term() {
            match search::search_predicate(&columns, term, &self.config) {
                Some(expr) => query.and_filter(expr),
                None => tracing::debug!(term, "no column accepts the search term"),
            }
        }

        let mut filters = vec![];

        for request_filter in &request.filters {
            let Some(column) = columns.get(&request_filter.column) else {
                tracing::debug!(column = %request_filter.column, "filter column does not resolve; skipping");
                continue;
            };

            if let Some(expr) = filter::filter_predicate(column, request_filter, &self.config)? {
                filters.push(expr);
            }
        }

        if !filters.is_empty() {
            query.and_filter(Expr::and_from_vec(filters));
        }

        for sort in &request.sorts {
            let Some(column) = columns.get(&sort.column) else {
                tracing::debug!(column = %sort.column, "sort column does not resolve; skipping");
                continue;
            };

            query.order_by(match sort.order {
                SortOrder::Asc => OrderByExpr::asc(Expr::column(column)),
                SortOrder::Desc => OrderByExpr::desc(Expr::column(column)),
            });
        }

        query.order_by(OrderByExpr::asc(Expr::column(
            self.schema.table(primary_table).primary_key,
        )));

        if window == Window::Limited {
            if let Some(limit) = self.limit(request) {
                query.limit = Some(limit);
            }
        }

        Ok(query)
    }

    /// The page window requested, if any. `page` is zero-based.
    fn limit(&self, request: &SearchRequest) -> Option<Limit> {
        let page_size = request.page_size.map(u64::from);

        match request.page {
            Some(page) => {
                let page_size = page_size.unwrap_or(self.config.default_page_size.into());
                Some(Limit::with_offset(page_size, u64::from(page) * page_size))
            }
            None => page_size.map(Limit::new),
        }
    }
}
