use crate::{
    executor::plan_executor::{Executor, PlanExecutor},
    parser::{ParseError, QueryOptions},
    planner::{LogicalPlan, PlanBuilder},
    schema::Record,
};

/// Final result set of one query, borrowing from the source collection.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub value: Vec<&'a Record>,
    pub count: Option<usize>,
}

/// Filter, order, skip, top and count over a normalized collection.
pub struct QueryPipeline;

impl QueryPipeline {
    /// Run `options` over `records`, ignoring any option that does not parse.
    ///
    /// `count` (requested with `$count=true`) is the length of the returned
    /// page, i.e. it is taken after `$skip`/`$top`.
    pub fn run<'a>(records: &'a [Record], options: &QueryOptions) -> QueryResult<'a> {
        Self::execute(PlanBuilder::from_options(options), records, options)
    }

    /// Like [`QueryPipeline::run`] but an unparseable `$filter` is an error.
    pub fn run_strict<'a>(records: &'a [Record], options: &QueryOptions) -> Result<QueryResult<'a>, ParseError> {
        let plan = PlanBuilder::from_options_strict(options)?;
        Ok(Self::execute(plan, records, options))
    }

    fn execute<'a>(plan: LogicalPlan, records: &'a [Record], options: &QueryOptions) -> QueryResult<'a> {
        tracing::debug!(?plan, source = records.len(), "executing query plan");

        let value = PlanExecutor::new(plan).execute(records);
        let count = options.wants_count().then_some(value.len());

        QueryResult { value, count }
    }
}
