use crate::schema::{Filter, FilterField};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(filter: &Filter, support: &TokenStream) -> TokenStream {
    let ident = &filter.ident;
    let (impl_generics, ty_generics, where_clause) = filter.generics.split_for_impl();

    let predicates = filter.fields.iter().map(|field| predicate(field, support));

    quote! {
        impl #impl_generics #support::Filter for #ident #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn bind<__M: #support::Model>(
                &self,
                mut query: #support::Select<__M>,
            ) -> #support::Result<#support::Select<__M>> {
                #( #predicates )*
                Ok(query)
            }
        }
    }
}

fn predicate(field: &FilterField, support: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    let column = &field.column;

    quote! {
        if let #support::Option::Some(value) = #support::Primitive::to_filter_value(&self.#ident) {
            query = query.filter_eq(#column, value);
        }
    }
}
