use super::Column;

/// Column mapping for one model.
///
/// Built once per model type, either by `#[derive(Model)]` or by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,

    /// Columns in the order the model loads and stores them
    pub columns: Vec<Column>,

    /// Indices into `columns` of the primary key, in declaration order
    pub primary_key: Vec<usize>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Table {
        let primary_key = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.primary_key)
            .map(|(index, _)| index)
            .collect();

        Table {
            name: name.into(),
            columns,
            primary_key,
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_by_field(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field == field)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| &column.name[..])
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|index| &self.columns[*index])
    }

    pub fn non_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| !column.primary_key)
    }

    pub fn update_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.update)
    }
}
