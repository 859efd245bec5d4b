extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Model, attributes(key, auto, column, model, table))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match stdmodel_codegen::generate_model(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Filter, attributes(field))]
pub fn derive_filter(input: TokenStream) -> TokenStream {
    match stdmodel_codegen::generate_filter(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
