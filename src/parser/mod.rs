pub mod query_parser;
pub use query_parser::*;

pub mod parse_error;
pub use parse_error::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod query_comparers;
pub use query_comparers::*;

pub mod literal;
pub use literal::*;

pub mod filter;
pub use filter::*;

pub mod order_by;
pub use order_by::*;

pub mod paging;
pub use paging::*;

pub mod query_options;
pub use query_options::*;
