/// Conflict handling attached to an [`Insert`](super::Insert).
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    /// Columns of the key the conflict is detected on
    pub target: Vec<String>,

    pub action: ConflictAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictAction {
    /// Keep the existing row
    DoNothing,

    /// Overwrite the listed columns with the values of the rejected row
    DoUpdate(Vec<String>),
}

impl ConflictAction {
    pub fn update_columns(&self) -> &[String] {
        match self {
            ConflictAction::DoNothing => &[],
            ConflictAction::DoUpdate(columns) => columns,
        }
    }
}
