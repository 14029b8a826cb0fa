extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `sift::View` and `sift::view::Load` for a struct with named
/// fields.
///
/// A field may name an alternate source property with
/// `#[view(remap = "source_name")]`; the mapper reads it when the record has
/// no property named like the field.
#[proc_macro_derive(View, attributes(view))]
pub fn derive_view(input: TokenStream) -> TokenStream {
    match sift_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
