pub mod edm_document;
pub use edm_document::*;
