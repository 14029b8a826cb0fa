use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct View {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// View fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl View {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "View can only be derived for structs with named fields",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "view fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "view generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::default();

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.finish(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
