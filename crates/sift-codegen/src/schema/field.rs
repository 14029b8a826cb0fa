use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field in the containing view
    pub(crate) id: usize,

    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Alternate source property name: `#[view(remap = "...")]`
    pub(crate) remap: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "view fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut remap = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("view") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("remap") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(
                            &lit,
                            "remap source name cannot be empty",
                        ));
                    }

                    if remap.is_some() {
                        return Err(meta.error("duplicate `remap` attribute"));
                    }

                    remap = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unsupported view attribute; expected `remap = \"...\"`"))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        errs.finish(Self {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            remap,
        })
    }

    /// The field name as the mapper sees it. Raw identifiers lose their
    /// `r#` prefix.
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
    }
}
