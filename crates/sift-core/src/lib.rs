mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses sift's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
