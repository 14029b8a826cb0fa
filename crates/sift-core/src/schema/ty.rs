/// The kind of a column, as far as filtering and searching are concerned.
///
/// The kind decides how a raw request string is coerced into a comparable
/// value and which operations make sense on the column. Storage details
/// (widths, collations) are the execution engine's concern and are not
/// modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Variable-length text
    Text,

    /// Fixed-length text
    Char,

    /// Signed 8-bit integer
    Byte,

    /// Signed 16-bit integer
    Short,

    /// Signed 32-bit integer
    Int,

    /// Signed 64-bit integer
    Long,

    /// 64-bit floating point
    Double,

    /// A civil date without time or zone
    Date,

    /// Enum-backed column: values are one of the declared variant names.
    Enum(TypeEnum),

    /// A column whose stored value passes through a transform. Request
    /// values are coerced by the base kind.
    Transformed(Box<Type>),

    /// An identifier wrapping a raw kind. Coerced values are re-wrapped as
    /// identifiers bound to the column's table.
    Id(Box<Type>),

    /// Any other storage type. Never coerces.
    Custom(String),
}

/// The declared variants of an enum-backed column.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeEnum {
    /// Name of the enumerated type
    pub name: String,

    /// Variant names, in declaration order
    pub variants: Vec<String>,
}

impl Type {
    pub fn id(inner: impl Into<Type>) -> Type {
        Type::Id(Box::new(inner.into()))
    }

    pub fn transformed(base: impl Into<Type>) -> Type {
        Type::Transformed(Box::new(base.into()))
    }

    pub fn enumeration<I, S>(name: impl Into<String>, variants: I) -> Type
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Type::Enum(TypeEnum {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        })
    }

    /// The kind the column behaves as once identifier wrapping is looked
    /// through.
    pub fn actual(&self) -> &Type {
        let mut ty = self;
        while let Type::Id(inner) = ty {
            ty = inner;
        }
        ty
    }

    pub fn is_id(&self) -> bool {
        matches!(self, Type::Id(_))
    }

    /// Returns `true` if values of this kind support substring matching.
    pub fn is_text(&self) -> bool {
        matches!(self.actual(), Type::Text | Type::Char)
    }

    /// Returns `true` if values of this kind support `<`, `<=`, `>`, `>=`.
    pub fn is_ordered(&self) -> bool {
        matches!(
            self.actual(),
            Type::Byte | Type::Short | Type::Int | Type::Long | Type::Double | Type::Date
        )
    }
}

impl TypeEnum {
    /// Index of the variant named `name`, if declared.
    pub fn variant(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant == name)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
