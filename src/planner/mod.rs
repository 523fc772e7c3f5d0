pub mod logical_plan;
pub use logical_plan::*;

pub mod plan_builder;
pub use plan_builder::*;
