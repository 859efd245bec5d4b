mod filter;
mod model;

use crate::schema::{Filter, Model};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn model(model: &Model) -> TokenStream {
    wrap_in_const(model::expand(model, &support()))
}

pub(super) fn filter(filter: &Filter) -> TokenStream {
    wrap_in_const(filter::expand(filter, &support()))
}

/// Path prefix for stdmodel types
fn support() -> TokenStream {
    quote!(_stdmodel::codegen_support)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use stdmodel as _stdmodel;
            #code
        };
    }
}
