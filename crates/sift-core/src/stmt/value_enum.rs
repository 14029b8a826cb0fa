/// A variant of an enum-backed column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    /// Index of the variant in the declaring type
    pub variant: usize,

    /// Declared name of the variant
    pub name: String,
}

impl ValueEnum {
    pub fn new(variant: usize, name: impl Into<String>) -> Self {
        Self {
            variant,
            name: name.into(),
        }
    }
}
