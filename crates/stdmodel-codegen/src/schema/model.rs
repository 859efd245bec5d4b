use super::{table_name, ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, one column each
    pub(crate) fields: Vec<Field>,

    /// Table the model maps to
    pub(crate) table: String,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if !fields.iter().any(|field| field.attrs.key.is_some()) {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model must have at least one #[key] field",
            ));
        }

        let mut columns = std::collections::HashSet::new();
        for field in &fields {
            let name = field.column_name();
            if !columns.insert(name.clone()) {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    format!("duplicate column name `{name}`"),
                ));
            }
        }

        let table = match &model_attr.table {
            Some(lit) => lit.value(),
            None => table_name(&ast.ident),
        };

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            table,
        })
    }
}
