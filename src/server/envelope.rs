use axum::http::{HeaderMap, header};
use serde::Serialize;

use crate::{executor::QueryResult, schema::Record};

/// JSON body of an entity-set response.
#[derive(Debug, Serialize)]
pub struct CollectionEnvelope<'a> {
    #[serde(rename = "@odata.context")]
    pub context: String,
    pub value: Vec<&'a Record>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<'a> CollectionEnvelope<'a> {
    pub fn new(service_root: &str, entity_set: &str, result: QueryResult<'a>) -> Self {
        Self {
            context: format!("{service_root}$metadata#{entity_set}"),
            value: result.value,
            count: result.count,
        }
    }
}

/// JSON body of the service document.
#[derive(Debug, Serialize)]
pub struct ServiceDocument {
    #[serde(rename = "@odata.context")]
    pub context: String,
    pub value: Vec<EntitySetRef>,
}

#[derive(Debug, Serialize)]
pub struct EntitySetRef {
    pub name: String,
    pub kind: &'static str,
    pub url: String,
}

impl ServiceDocument {
    pub fn new(service_root: &str, entity_sets: &[&str]) -> Self {
        Self {
            context: format!("{service_root}$metadata"),
            value: entity_sets
                .iter()
                .map(|name| EntitySetRef { name: name.to_string(), kind: "EntitySet", url: name.to_string() })
                .collect(),
        }
    }
}

/// Absolute service root (`http://host/odata/`) from request headers.
///
/// Falls back to an empty root, which makes context URLs relative, when the
/// request carries no `Host`.
pub fn service_root(headers: &HeaderMap) -> String {
    let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) else {
        return String::new();
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    format!("{scheme}://{host}/odata/")
}
