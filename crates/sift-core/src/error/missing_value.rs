use super::Error;

/// Error when a filter operation requires a value and none was given.
#[derive(Debug)]
pub(super) struct MissingValue {
    column: Box<str>,
    operation: Box<str>,
}

impl std::error::Error for MissingValue {}

impl core::fmt::Display for MissingValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing value: operation `{}` on column `{}` requires a value",
            self.operation, self.column
        )
    }
}

impl Error {
    /// Creates a missing value error for `operation` applied to `column`.
    pub fn missing_value(column: impl Into<String>, operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingValue(MissingValue {
            column: column.into().into(),
            operation: operation.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing value error.
    pub fn is_missing_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingValue(_))
    }
}
