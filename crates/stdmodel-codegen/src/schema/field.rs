use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Set when the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set when the field is annotated with `#[auto]`
    pub(crate) auto: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,

    /// True if the field is annotated with `#[model(update)]`
    pub(crate) update: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            key: None,
            auto: None,
            column: None,
            update: false,
        };

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    attrs.auto = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("model") {
                let result = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("update") {
                        attrs.update = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported model attribute; expected `update`"))
                    }
                });

                if let Err(err) = result {
                    errs.push(err);
                }
            }
        }

        if let (Some(key), true) = (&attrs.key, attrs.update) {
            errs.push(syn::Error::new_spanned(
                key,
                "primary key fields cannot be updated on conflict",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// Storage column name; the field name unless `#[column]` renames it.
    pub(crate) fn column_name(&self) -> String {
        match &self.attrs.column {
            Some(column) => column.name.value().trim().to_string(),
            None => self.ident.to_string(),
        }
    }
}
