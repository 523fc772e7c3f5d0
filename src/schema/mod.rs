pub mod edm_type;
pub use edm_type::*;

pub mod field_info;
pub use field_info::*;

pub mod schema_dict;
pub use schema_dict::*;

pub mod field_value;
pub use field_value::*;

pub mod normalizer;
pub use normalizer::*;
