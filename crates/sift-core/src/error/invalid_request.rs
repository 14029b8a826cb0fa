use super::Error;

/// Error when an incoming search request cannot be decoded.
///
/// This occurs when:
/// - A sort entry names an unknown order (anything but `asc` / `desc`)
/// - A filter entry names an unknown operation code
/// - A sort or filter entry has an empty column
/// - `page` or `page_size` is not a non-negative integer
///
/// Values that decode fine but do not fit a column are *not* request errors;
/// the shaping engine skips them.
#[derive(Debug)]
pub(super) struct InvalidRequest {
    message: Box<str>,
}

impl std::error::Error for InvalidRequest {}

impl core::fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid request: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRequest(InvalidRequest {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid request error.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRequest(_))
    }
}
