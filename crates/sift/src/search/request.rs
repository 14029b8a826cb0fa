use super::{Filter, Operation, Sort, SortOrder};
use sift_core::{Error, Result};

use serde::{Deserialize, Serialize};

/// A decoded search request: free-text search, filters, sorts and a page
/// window.
///
/// Requests are built once per incoming call from untrusted input and are
/// not changed afterward.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text term matched against every eligible column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    pub filters: Vec<Filter>,

    pub sorts: Vec<Sort>,

    /// Zero-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a request from query-string pairs.
    ///
    /// Recognized keys are `search`, `sort[]`, `filter[]`, `page` and
    /// `page_size`; `sort[]` and `filter[]` may repeat and keep their order.
    /// Other keys are ignored. For `search`, `page` and `page_size` the last
    /// occurrence wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = SearchRequest::default();

        for (key, value) in pairs {
            let value = value.as_ref();

            match key.as_ref() {
                "search" => request.search = Some(value.to_string()),
                "sort[]" => request.sorts.push(value.parse()?),
                "filter[]" => request.filters.push(value.parse()?),
                "page" => request.page = Some(parse_number("page", value)?),
                "page_size" => request.page_size = Some(parse_number("page_size", value)?),
                _ => {}
            }
        }

        Ok(request)
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn filter(mut self, column: impl Into<String>, operation: Operation, value: &str) -> Self {
        self.filters
            .push(Filter::new(column, operation, Some(value.to_string())));
        self
    }

    /// Adds a filter without a value, as used by the nullability checks.
    pub fn filter_without_value(mut self, column: impl Into<String>, operation: Operation) -> Self {
        self.filters.push(Filter::new(column, operation, None));
        self
    }

    pub fn sort(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.sorts.push(Sort::new(column, order));
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// The free-text term, if present and not empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|err| {
        Error::from(err).context(Error::invalid_request(format!(
            "`{key}` must be a non-negative integer, got `{value}`"
        )))
    })
}
