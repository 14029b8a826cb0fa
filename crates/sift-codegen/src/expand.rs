mod load;
mod view;

use crate::schema::View;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The view being expanded
    view: &'a View,

    /// Path prefix for sift types
    sift: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let view_impl = self.expand_view_impl();
        let load_impl = self.expand_load_impl();

        wrap_in_const(quote! {
            #view_impl
            #load_impl
        })
    }
}

pub(super) fn view(view: &View) -> TokenStream {
    Expand {
        view,
        sift: quote!(_sift::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sift as _sift;
            #code
        };
    }
}
