use super::Error;

/// Error when the mapper is asked to build a view that is not struct-shaped.
///
/// A mapping target must be a fixed, ordered set of named fields. This is a
/// programming error, surfaced at call time.
#[derive(Debug)]
pub(super) struct UnsupportedTargetType {
    name: Box<str>,
}

impl std::error::Error for UnsupportedTargetType {}

impl core::fmt::Display for UnsupportedTargetType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported target type: `{}` is not a struct-shaped view",
            self.name
        )
    }
}

impl Error {
    /// Creates an unsupported target type error.
    pub fn unsupported_target_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedTargetType(
            UnsupportedTargetType {
                name: name.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported target type error.
    pub fn is_unsupported_target_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedTargetType(_))
    }
}
