//! The parsed form of a search request, and its decoding from query-string
//! pairs.
//!
//! Wire conventions:
//!
//! ```text
//! search=ann smith
//! sort[]=<column>.<asc|desc>
//! filter[]=<column>:<op-code>[:<value>]
//! page=<n>
//! page_size=<n>
//! ```

mod filter;
pub use filter::Filter;

mod operation;
pub use operation::Operation;

mod request;
pub use request::SearchRequest;

mod sort;
pub use sort::{Sort, SortOrder};
