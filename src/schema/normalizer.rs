use indexmap::IndexMap;
use serde_json::Value;

use crate::schema::{FieldValue, SchemaDict};

/// One normalized transaction, keyed in schema declaration order.
pub type Record = IndexMap<String, FieldValue>;

/// Coerces raw upstream items into records of a declared schema.
pub struct Normalizer;

impl Normalizer {
    /// Normalize one raw item against `schema`.
    ///
    /// The output always carries exactly the schema's fields. Undeclared keys
    /// are dropped; missing keys become null. Never fails.
    pub fn normalize(item: &Value, schema: &SchemaDict) -> Record {
        let object = item.as_object();
        let mut record = IndexMap::with_capacity(schema.len());

        for (name, info) in &schema.fields {
            let raw = object.and_then(|o| o.get(name));
            let value = if info.ty.is_numeric() {
                Self::numeric(raw)
            } else {
                Self::passthrough(raw)
            };
            record.insert(name.clone(), value);
        }

        record
    }

    /// Normalize every item of an upstream collection.
    pub fn normalize_all(items: &[Value], schema: &SchemaDict) -> Vec<Record> {
        items.iter().map(|item| Self::normalize(item, schema)).collect()
    }

    fn numeric(raw: Option<&Value>) -> FieldValue {
        match raw {
            None | Some(Value::Null) => FieldValue::Null,
            Some(Value::String(s)) if s.is_empty() => FieldValue::Null,
            Some(v) => FieldValue::Number(FieldValue::coerce_number(v)),
        }
    }

    fn passthrough(raw: Option<&Value>) -> FieldValue {
        match raw {
            None | Some(Value::Null) => FieldValue::Null,
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(v) => FieldValue::Raw(v.clone()),
        }
    }
}
