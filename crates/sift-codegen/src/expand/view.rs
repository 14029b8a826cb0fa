use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_view_impl(&self) -> TokenStream {
        let sift = &self.sift;
        let ident = &self.view.ident;
        let name = ident.to_string();
        let descriptor = self.expand_descriptor();
        let load_body = self.expand_load_body();
        let len = self.view.fields.len();

        quote! {
            impl #sift::View for #ident {
                fn descriptor() -> &'static #sift::ViewDescriptor {
                    static DESCRIPTOR: #sift::OnceLock<#sift::ViewDescriptor> = #sift::OnceLock::new();
                    DESCRIPTOR.get_or_init(|| #descriptor)
                }

                fn load(mut record: #sift::ValueRecord) -> #sift::Result<Self> {
                    if record.len() != #len {
                        return Err(#sift::Error::type_conversion(
                            #sift::Value::Record(record),
                            #name,
                        ));
                    }

                    #load_body
                }
            }
        }
    }

    fn expand_descriptor(&self) -> TokenStream {
        let sift = &self.sift;
        let name = self.view.ident.to_string();

        let fields = self.view.fields.iter().map(|field| {
            let field_name = field.name();
            let ty = &field.ty;

            quote! {
                #sift::Field::new(
                    #field_name,
                    <#ty as #sift::Load>::field_ty(),
                    <#ty as #sift::Load>::OPTIONAL,
                )
            }
        });

        let remap_entries: Vec<_> = self
            .view
            .fields
            .iter()
            .filter_map(|field| {
                let source = field.remap.as_ref()?;
                let field_name = field.name();
                Some(quote!(.entry(#field_name, #source)))
            })
            .collect();

        let remap = if remap_entries.is_empty() {
            quote!()
        } else {
            quote!(.with_remap(#sift::FieldRemap::new() #( #remap_entries )*))
        };

        quote! {
            #sift::ViewDescriptor::new(#name, vec![ #( #fields ),* ]) #remap
        }
    }

    fn expand_load_body(&self) -> TokenStream {
        let sift = &self.sift;
        let view_name = self.view.ident.to_string();

        let fields = self.view.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let index = field.id;
            let field_name = field.name();

            quote! {
                #ident: <#ty as #sift::Load>::load(record[#index].take()).map_err(|err| {
                    err.context(#sift::Error::from_args(format_args!(
                        "loading field `{}` of `{}`",
                        #field_name,
                        #view_name,
                    )))
                })?,
            }
        });

        quote! {
            Ok(Self {
                #( #fields )*
            })
        }
    }
}
