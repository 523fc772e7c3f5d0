use crate::schema::EdmType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub ty: EdmType,
    pub nullable: bool,
}

impl FieldInfo {
    pub fn new(ty: EdmType) -> Self {
        Self { ty, nullable: true }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}
