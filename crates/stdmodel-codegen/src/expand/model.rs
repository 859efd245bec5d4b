use crate::schema::{Field, Model};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(model: &Model, support: &TokenStream) -> TokenStream {
    let model_ident = &model.ident;
    let model_name = model_ident.to_string();
    let table_name = &model.table;

    let columns = model.fields.iter().map(|field| column(field, support));

    let load_fields = model.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        let index = field.id;
        let field_name = ident.to_string();

        quote! {
            #ident: #support::load_field::<#ty>(&mut record, #index, #model_name, #field_name)?,
        }
    });

    let record_values = model.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;

        quote! {
            <#ty as #support::Primitive>::to_value(&self.#ident)
        }
    });

    quote! {
        use #support::{ViaQueryDefault as _, WithoutQueryDefault as _};

        impl #support::Model for #model_ident {
            fn default_scope() -> #support::Option<fn(#support::Select<Self>) -> #support::Select<Self>> {
                // Resolves to the `QueryDefault` impl when one exists for the
                // concrete type, and to `None` otherwise.
                (&&#support::DefaultScope::<Self>::new()).resolve()
            }

            fn table() -> &'static #support::Table {
                static TABLE: std::sync::OnceLock<#support::Table> = std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    #support::Table::new(#table_name, vec![ #( #columns ),* ])
                })
            }

            fn load(mut record: #support::ValueRecord) -> #support::Result<Self> {
                Ok(Self {
                    #( #load_fields )*
                })
            }

            fn to_record(&self) -> #support::ValueRecord {
                #support::ValueRecord::from_vec(vec![ #( #record_values ),* ])
            }
        }
    }
}

fn column(field: &Field, support: &TokenStream) -> TokenStream {
    let ty = &field.ty;
    let name = field.column_name();
    let field_name = field.ident.to_string();
    let primary_key = field.attrs.key.is_some();
    let auto_increment = field.attrs.auto.is_some();
    let update = field.attrs.update;

    quote! {
        #support::Column {
            name: #name.to_string(),
            field: #field_name.to_string(),
            ty: <#ty as #support::Primitive>::ty(),
            nullable: <#ty as #support::Primitive>::NULLABLE,
            primary_key: #primary_key,
            auto_increment: #auto_increment,
            update: #update,
        }
    }
}
