/// Column types understood by the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Bytes,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Bool => "Bool",
            Type::I32 => "I32",
            Type::I64 => "I64",
            Type::F64 => "F64",
            Type::String => "String",
            Type::Bytes => "Bytes",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Type::I32 | Type::I64)
    }
}
