use super::Error;

/// Error when a required view field has no source value.
///
/// Raised by the mapper when neither a same-named source property nor a
/// remapped one yields a value for a non-optional field.
#[derive(Debug)]
pub(super) struct MissingRequiredField {
    pub(super) view: Box<str>,
    pub(super) field: Box<str>,
}

impl std::error::Error for MissingRequiredField {}

impl core::fmt::Display for MissingRequiredField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing required field: `{}` of `{}` has no source value",
            self.field, self.view
        )
    }
}

impl Error {
    /// Creates a missing required field error.
    pub fn missing_required_field(view: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingRequiredField(
            MissingRequiredField {
                view: view.into().into(),
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if a required field could not be populated anywhere
    /// down the context chain, so failures inside nested views still report
    /// as this kind.
    pub fn is_missing_required_field(&self) -> bool {
        self.missing_field_name().is_some()
    }

    /// Name of the field that could not be populated. Looks through context
    /// added while mapping nested views and collection elements.
    pub fn missing_field_name(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::MissingRequiredField(err) => Some(&*err.field),
            _ => None,
        })
    }
}
