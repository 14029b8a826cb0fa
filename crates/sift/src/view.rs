//! Maps loaded records onto flat view types.
//!
//! A view is a plain struct, usually with `#[derive(View)]`. Mapping walks
//! the view's fields in declaration order and, for each, takes the
//! same-named property of the source [`Record`], falling back to the view's
//! [`FieldRemap`]. Nested records map recursively into nested views, lazy
//! collections are materialized, and identifiers are unwrapped to their raw
//! value. The view is only constructed once every field resolved.
//!
//! ```ignore
//! #[derive(View)]
//! struct UserView {
//!     id: i64,
//!     name: String,
//!     #[view(remap = "email_address")]
//!     email: Option<String>,
//!     orders: Vec<OrderView>,
//! }
//!
//! let view: UserView = sift::view::map(&record)?;
//! ```

mod descriptor;
pub use descriptor::{Field, FieldRemap, FieldTy, ViewDescriptor, ViewKind};

mod lazy;
pub use lazy::LazyCollection;

mod load;
pub use load::Load;

mod map;
pub use map::map_record;

mod record;
pub use record::{Property, Record};

use sift_core::{stmt::ValueRecord, Result};

/// A struct-shaped target of the mapper.
pub trait View: Sized {
    /// Static description of the view's fields. Built once and shared.
    fn descriptor() -> &'static ViewDescriptor;

    /// Construct the view from values resolved in descriptor field order.
    fn load(record: ValueRecord) -> Result<Self>;
}

/// Maps `record` into the view type `V`.
pub fn map<V: View>(record: &Record) -> Result<V> {
    let values = map_record(record, V::descriptor())?;
    V::load(values)
}
