/// Static description of a view type.
#[derive(Debug)]
pub struct ViewDescriptor {
    /// Name of the view type, used in diagnostics
    pub name: &'static str,

    pub kind: ViewKind,
}

#[derive(Debug)]
pub enum ViewKind {
    /// A fixed, ordered set of named fields constructed at once
    Struct {
        fields: Vec<Field>,
        remap: Option<FieldRemap>,
    },

    /// A type the mapper cannot construct field by field
    Opaque,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldTy,

    /// Optional fields take `Null` when no source property is found.
    pub optional: bool,
}

/// What a field holds, as far as conversion from a record is concerned.
#[derive(Debug, Clone)]
pub enum FieldTy {
    /// A plain value. Identifiers are unwrapped to their raw value.
    Value,

    /// A nested view, mapped recursively from a nested record
    View(fn() -> &'static ViewDescriptor),

    /// A sequence; collections are materialized and each element converted
    List(Box<FieldTy>),
}

/// Alternate source property names for fields whose name has no match on
/// the record.
#[derive(Debug, Default, Clone)]
pub struct FieldRemap {
    entries: Vec<(&'static str, &'static str)>,
}

impl ViewDescriptor {
    pub fn new(name: &'static str, fields: Vec<Field>) -> Self {
        Self {
            name,
            kind: ViewKind::Struct {
                fields,
                remap: None,
            },
        }
    }

    pub fn opaque(name: &'static str) -> Self {
        Self {
            name,
            kind: ViewKind::Opaque,
        }
    }

    pub fn with_remap(mut self, remap: FieldRemap) -> Self {
        if let ViewKind::Struct { remap: slot, .. } = &mut self.kind {
            *slot = Some(remap);
        }
        self
    }

    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            ViewKind::Struct { fields, .. } => fields,
            ViewKind::Opaque => &[],
        }
    }
}

impl Field {
    pub fn new(name: &'static str, ty: FieldTy, optional: bool) -> Self {
        Self { name, ty, optional }
    }
}

impl FieldRemap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `field` may be read from the `source` property.
    pub fn entry(mut self, field: &'static str, source: &'static str) -> Self {
        self.entries.push((field, source));
        self
    }

    pub fn source_for(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, source)| *source)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
