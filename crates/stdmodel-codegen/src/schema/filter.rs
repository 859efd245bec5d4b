use super::ErrorSet;

/// A struct deriving `Filter`.
#[derive(Debug)]
pub(crate) struct Filter {
    pub(crate) ident: syn::Ident,

    pub(crate) generics: syn::Generics,

    /// Fields tagged with `#[field]`, in declaration order
    pub(crate) fields: Vec<FilterField>,
}

#[derive(Debug)]
pub(crate) struct FilterField {
    pub(crate) ident: syn::Ident,

    /// Column the field constrains
    pub(crate) column: String,
}

impl Filter {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "filter fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for field in &node.named {
            let Some(ident) = &field.ident else {
                continue;
            };

            let mut column = None;

            for attr in &field.attrs {
                if !attr.path().is_ident("field") {
                    continue;
                }

                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[field] attribute"));
                    continue;
                }

                match column_name(attr, ident) {
                    Ok(name) => column = Some(name),
                    Err(err) => errs.push(err),
                }
            }

            if let Some(column) = column {
                fields.push(FilterField {
                    ident: ident.clone(),
                    column,
                });
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Filter {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            fields,
        })
    }
}

/// `#[field]` uses the field name; `#[field("col")]` names the column.
fn column_name(attr: &syn::Attribute, ident: &syn::Ident) -> syn::Result<String> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(ident.to_string()),
        syn::Meta::List(_) => {
            let lit: syn::LitStr = attr.parse_args()?;
            let name = lit.value().trim().to_string();

            if name.is_empty() {
                return Err(syn::Error::new_spanned(lit, "column name cannot be empty"));
            }

            Ok(name)
        }
        syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[field]` or `#[field(\"column\")]`",
        )),
    }
}
