use crate::stmt::Type;

/// How one struct field maps to a table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Storage name of the column
    pub name: String,

    /// Name of the struct field backing the column
    pub field: String,

    pub ty: Type,

    pub nullable: bool,

    /// Part of the primary key
    pub primary_key: bool,

    /// Value generated by the database on insert
    pub auto_increment: bool,

    /// Overwritten when a save hits an existing key
    pub update: bool,
}

impl Column {
    /// A non-key, non-nullable column whose field has the same name.
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        let name = name.into();
        Column {
            field: name.clone(),
            name,
            ty,
            nullable: false,
            primary_key: false,
            auto_increment: false,
            update: false,
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Column {
        self.field = field.into();
        self
    }

    pub fn nullable(mut self) -> Column {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Column {
        self.auto_increment = true;
        self
    }

    pub fn update(mut self) -> Column {
        self.update = true;
        self
    }
}
