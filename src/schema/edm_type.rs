use serde::{Deserialize, Serialize};

/// Declared EDM primitive type of an exposed property.
///
/// The variant decides two things: how the normalizer coerces the raw
/// upstream value, and which `Type` attribute the metadata document
/// advertises for the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdmType {
    /// `Edm.Int32`, numeric coercion
    Int32,
    /// `Edm.Double`, numeric coercion
    Double,
    /// `Edm.String`, raw passthrough
    String,
}

impl EdmType {
    /// Qualified type name as written in CSDL.
    pub fn edm_name(&self) -> &'static str {
        match self {
            EdmType::Int32 => "Edm.Int32",
            EdmType::Double => "Edm.Double",
            EdmType::String => "Edm.String",
        }
    }

    /// True when values of this type are coerced to numbers on ingestion.
    pub fn is_numeric(&self) -> bool {
        matches!(self, EdmType::Int32 | EdmType::Double)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edm_names() {
        assert_eq!(EdmType::Int32.edm_name(), "Edm.Int32");
        assert_eq!(EdmType::Double.edm_name(), "Edm.Double");
        assert_eq!(EdmType::String.edm_name(), "Edm.String");
    }

    #[test]
    fn test_numeric_classification() {
        assert!(EdmType::Int32.is_numeric());
        assert!(EdmType::Double.is_numeric());
        assert!(!EdmType::String.is_numeric());
    }
}
