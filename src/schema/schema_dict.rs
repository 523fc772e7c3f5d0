use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::schema::{EdmType, FieldInfo};

/// Declared shape of one exposed entity.
///
/// The `fields` map keeps declaration order, which is also the key order of
/// every normalized record and the property order in the metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDict {
    /// Entity type name, e.g. `Transaction`
    pub entity_type: String,
    /// Entity set name, e.g. `Transactions`
    pub entity_set: String,
    /// Key property name
    pub key: String,
    /// Map of field name -> field metadata
    pub fields: IndexMap<String, FieldInfo>,
}

static TRANSACTIONS: Lazy<SchemaDict> = Lazy::new(SchemaDict::build_transactions);

impl SchemaDict {
    /// Return the `FieldInfo` for a field name if present.
    pub fn get(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fixed transaction schema served by the adapter.
    pub fn transactions() -> &'static SchemaDict {
        &TRANSACTIONS
    }

    fn build_transactions() -> SchemaDict {
        let declared = [
            ("id", EdmType::Int32),
            ("outlet", EdmType::String),
            ("date", EdmType::String),
            ("day", EdmType::String),
            ("guest_count", EdmType::Int32),
            ("category", EdmType::String),
            ("quantity", EdmType::Double),
            ("cost_price", EdmType::Double),
            ("selling_price", EdmType::Double),
            ("total_sales", EdmType::Double),
            ("total_cost_price", EdmType::Double),
            ("profit", EdmType::Double),
        ];

        let mut fields = IndexMap::new();
        for (name, ty) in declared {
            let info = if name == "id" { FieldInfo::new(ty).not_null() } else { FieldInfo::new(ty) };
            fields.insert(name.to_string(), info);
        }

        SchemaDict {
            entity_type: "Transaction".to_string(),
            entity_set: "Transactions".to_string(),
            key: "id".to_string(),
            fields,
        }
    }
}
