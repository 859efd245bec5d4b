use crate::Model;

use indexmap::IndexSet;
use stdmodel_core::schema::Table;

/// Columns overwritten when `save` hits an existing row.
///
/// The set is the model's `#[model(update)]` columns in declaration order,
/// followed by `additional` names not already present.
pub fn update_columns<M: Model>(additional: &[&str]) -> Vec<String> {
    resolve(M::table(), additional)
}

pub(crate) fn resolve(table: &Table, additional: &[&str]) -> Vec<String> {
    let mut columns = IndexSet::new();

    for column in table.update_columns() {
        columns.insert(column.name.clone());
    }

    for name in additional {
        columns.insert(name.to_string());
    }

    columns.into_iter().collect()
}
