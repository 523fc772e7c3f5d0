use crate::{parser::{FilterPredicate, OrderBy, Paging, ParseError, QueryOptions}, planner::LogicalPlan};

pub struct PlanBuilder;

impl PlanBuilder {
    /// Build the plan for `options`, dropping any stage whose option does not
    /// parse.
    pub fn from_options(options: &QueryOptions) -> LogicalPlan {
        let filter = options.filter.as_deref().and_then(FilterPredicate::parse);
        Self::assemble(filter, options)
    }

    /// Like [`PlanBuilder::from_options`], but an unparseable, non-blank
    /// `$filter` is an error instead of being ignored.
    pub fn from_options_strict(options: &QueryOptions) -> Result<LogicalPlan, ParseError> {
        let filter = match options.filter.as_deref() {
            Some(text) if !text.trim().is_empty() => Some(FilterPredicate::try_parse(text)?),
            _ => None,
        };
        Ok(Self::assemble(filter, options))
    }

    // filter -> sort -> skip -> top, always in this order
    fn assemble(filter: Option<FilterPredicate>, options: &QueryOptions) -> LogicalPlan {
        let mut plan = LogicalPlan::Scan;

        if let Some(predicate) = filter {
            plan = LogicalPlan::Filter { input: Box::new(plan), predicate };
        }

        if let Some(key) = options.order_by.as_deref().and_then(OrderBy::parse) {
            plan = LogicalPlan::Sort { input: Box::new(plan), key };
        }

        if let Some(count) = Paging::skip(options.skip.as_deref()) {
            plan = LogicalPlan::Skip { input: Box::new(plan), count };
        }

        if let Some(count) = Paging::top(options.top.as_deref()) {
            plan = LogicalPlan::Top { input: Box::new(plan), count };
        }

        plan
    }
}
