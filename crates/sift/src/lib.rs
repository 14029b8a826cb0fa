//! Schema-driven query shaping and record-to-view mapping.
//!
//! [`shape`] turns a decoded [`SearchRequest`](search::SearchRequest) into
//! the filter, ordering and page window of a [`Select`](stmt::Select).
//! [`view`] maps the loaded records onto flat view structs.

mod config;
pub use config::Config;

pub mod search;
pub use search::SearchRequest;

pub mod shape;
pub use shape::{Shaper, Window};

pub mod store;

pub mod view;
pub use view::View;

pub use sift_core::{bail, err, schema, stmt, Error, Result, Schema};
pub use sift_macros::View;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::view::{Field, FieldRemap, FieldTy, Load, View, ViewDescriptor};
    pub use sift_core::{
        stmt::{Value, ValueRecord},
        Error, Result,
    };
    pub use std::sync::OnceLock;
}
