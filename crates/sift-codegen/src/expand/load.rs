use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `Load` lets the view nest inside other views, `Option` and `Vec`.
    pub(super) fn expand_load_impl(&self) -> TokenStream {
        let sift = &self.sift;
        let ident = &self.view.ident;
        let name = ident.to_string();

        quote! {
            impl #sift::Load for #ident {
                fn field_ty() -> #sift::FieldTy {
                    #sift::FieldTy::View(<Self as #sift::View>::descriptor)
                }

                fn load(value: #sift::Value) -> #sift::Result<Self> {
                    match value {
                        #sift::Value::Record(record) => <Self as #sift::View>::load(record),
                        value => Err(#sift::Error::type_conversion(value, #name)),
                    }
                }
            }
        }
    }
}
