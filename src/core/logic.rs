use crate::core::calculator::aggregate::{MonthAggregate, aggregate_month};
use crate::core::calculator::month::MonthRef;
use crate::core::calculator::summary::MonthlySummary;
use crate::db::repository::TimeRepository;
use crate::errors::AppResult;

/// Everything the calendar needs for one month.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub month: MonthRef,
    pub aggregate: MonthAggregate,
    pub summary: MonthlySummary,
}

pub struct Core;

impl Core {
    pub fn build_month_view(
        repo: &dyn TimeRepository,
        month: MonthRef,
        daily_goal_secs: i64,
    ) -> AppResult<MonthView> {
        let aggregate = aggregate_month(repo, &month)?;
        let summary = MonthlySummary::compute(&aggregate, &month, daily_goal_secs);

        Ok(MonthView {
            month,
            aggregate,
            summary,
        })
    }
}
