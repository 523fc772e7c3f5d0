use crate::parser::{FilterPredicate, OrderBy};

/// Stages of one collection query, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalPlan {
    /// The normalized source collection.
    Scan,

    /// Keep records matching the predicate.
    Filter {
        input: Box<LogicalPlan>,
        predicate: FilterPredicate,
    },

    /// Stable sort with NULLS LAST policy (enforced in executor).
    Sort {
        input: Box<LogicalPlan>,
        key: OrderBy,
    },

    /// `$skip`
    Skip {
        input: Box<LogicalPlan>,
        count: usize,
    },

    /// `$top`
    Top {
        input: Box<LogicalPlan>,
        count: usize,
    },
}
