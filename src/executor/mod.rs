pub mod eval;
pub mod helpers;

pub mod plan_executor;
pub use plan_executor::*;

pub mod pipeline;
pub use pipeline::*;
