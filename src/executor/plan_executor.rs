use crate::{executor::{eval::Eval, helpers::Helpers}, planner::LogicalPlan, schema::{FieldValue, Record}};

pub trait Executor {
    fn execute<'a>(&self, source: &'a [Record]) -> Vec<&'a Record>;
}

/// Runs a [`LogicalPlan`] over a borrowed collection.
///
/// Stages never touch the source; each returns a new vector of references
/// into it.
pub struct PlanExecutor {
    plan: LogicalPlan,
}

impl Executor for PlanExecutor {
    fn execute<'a>(&self, source: &'a [Record]) -> Vec<&'a Record> {
        Self::run_plan(&self.plan, source)
    }
}

static NULL: FieldValue = FieldValue::Null;

impl PlanExecutor {
    pub fn new(plan: LogicalPlan) -> Self { Self { plan } }

    pub fn run_plan<'a>(plan: &LogicalPlan, source: &'a [Record]) -> Vec<&'a Record> {
        match plan {
            LogicalPlan::Scan => source.iter().collect(),
            LogicalPlan::Filter { input, predicate } => {
                let rows = Self::run_plan(input, source);
                rows.into_iter()
                    .filter(|row| Eval::eval_predicate(predicate, row))
                    .collect()
            }
            LogicalPlan::Sort { input, key } => {
                let mut rows = Self::run_plan(input, source);
                // stable sort
                rows.sort_by(|a, b| {
                    let av = a.get(&key.field).unwrap_or(&NULL);
                    let bv = b.get(&key.field).unwrap_or(&NULL);
                    Helpers::cmp_for_sort(av, bv, key.ascending)
                });
                rows
            }
            LogicalPlan::Skip { input, count } => {
                let rows = Self::run_plan(input, source);
                rows.into_iter().skip(*count).collect()
            }
            LogicalPlan::Top { input, count } => {
                let mut rows = Self::run_plan(input, source);
                rows.truncate(*count);
                rows
            }
        }
    }
}
