pub mod schema;
pub use schema::{EdmType, FieldValue, Normalizer, Record, SchemaDict};

pub mod parser;
pub use parser::{FilterPredicate, OrderBy, ParseError, QueryOptions};

pub mod planner;

pub mod executor;
pub use executor::{QueryPipeline, QueryResult};

pub mod metadata;
pub use metadata::EdmDocument;

pub mod server;
pub use server::{AdapterConfig, AdapterError, router};
