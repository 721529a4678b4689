use crate::core::calculator::aggregate::{CompanySeconds, MonthAggregate};
use crate::core::calculator::month::MonthRef;
use crate::utils::time::seconds_to_hours;

pub const DEFAULT_DAILY_GOAL_SECS: i64 = 8 * 3600;

pub const FULL_DAY_SECS: i64 = 8 * 3600;
pub const PARTIAL_DAY_SECS: i64 = 4 * 3600;

/// Companies listed per calendar cell before the overflow indicator.
pub const TOP_PER_DAY: usize = 3;

/// Color class of a day by total seconds worked (inclusive lower bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Full,
    Partial,
    Low,
    None,
}

impl DayClass {
    pub fn classify(seconds: i64) -> Self {
        if seconds >= FULL_DAY_SECS {
            DayClass::Full
        } else if seconds >= PARTIAL_DAY_SECS {
            DayClass::Partial
        } else if seconds > 0 {
            DayClass::Low
        } else {
            DayClass::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayClass::Full => "full",
            DayClass::Partial => "partial",
            DayClass::Low => "low",
            DayClass::None => "none",
        }
    }
}

/// Top companies of one day, most worked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRanking<'a> {
    pub top: Vec<&'a CompanySeconds>,
    /// Companies beyond the top 3 (`+N more`).
    pub overflow: usize,
}

/// Rank a day's companies by seconds, descending. Ties keep input order.
pub fn rank_day(entries: &[CompanySeconds]) -> DayRanking<'_> {
    let mut sorted: Vec<&CompanySeconds> = entries.iter().collect();
    sorted.sort_by(|a, b| b.seconds.cmp(&a.seconds));

    let overflow = sorted.len().saturating_sub(TOP_PER_DAY);
    sorted.truncate(TOP_PER_DAY);

    DayRanking {
        top: sorted,
        overflow,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyStats {
    pub name: String,
    /// Position in the month's discovery order.
    pub discovery_index: usize,
    pub total_secs: i64,
    pub active_days: u32,
}

impl CompanyStats {
    pub fn hours(&self) -> f64 {
        seconds_to_hours(self.total_secs)
    }

    pub fn average_hours(&self) -> f64 {
        if self.active_days == 0 {
            0.0
        } else {
            self.hours() / self.active_days as f64
        }
    }

    /// Share of the month total in percent, 0 when nothing was worked.
    pub fn share_pct(&self, month_total_secs: i64) -> f64 {
        if month_total_secs <= 0 {
            0.0
        } else {
            self.total_secs as f64 / month_total_secs as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Sorted by total seconds descending, ties in discovery order.
    pub companies: Vec<CompanyStats>,
    pub total_secs: i64,
    pub worked_days: u32,
    pub business_days: u32,
    pub daily_goal_secs: i64,
    pub goal_secs: i64,
    /// `total_secs - goal_secs`; positive is surplus.
    pub variance_secs: i64,
}

impl MonthlySummary {
    pub fn compute(agg: &MonthAggregate, month: &MonthRef, daily_goal_secs: i64) -> Self {
        let mut companies: Vec<CompanyStats> = agg
            .companies()
            .iter()
            .enumerate()
            .map(|(i, name)| CompanyStats {
                name: name.clone(),
                discovery_index: i,
                total_secs: 0,
                active_days: 0,
            })
            .collect();

        let mut worked_days = 0;

        for (day, entries) in agg.days() {
            if day > month.days_in_month() {
                continue;
            }

            let mut day_total = 0;
            for cs in entries {
                day_total += cs.seconds;
                if let Some(stats) = agg.company_index(&cs.company).map(|i| &mut companies[i]) {
                    stats.total_secs += cs.seconds;
                    if cs.seconds > 0 {
                        stats.active_days += 1;
                    }
                }
            }
            if day_total > 0 {
                worked_days += 1;
            }
        }

        // Stable: equal totals stay in discovery order.
        companies.sort_by(|a, b| b.total_secs.cmp(&a.total_secs));

        let total_secs = companies.iter().map(|c| c.total_secs).sum();
        let business_days = month.business_days();
        let goal_secs = (business_days as i64).saturating_mul(daily_goal_secs);

        Self {
            companies,
            total_secs,
            worked_days,
            business_days,
            daily_goal_secs,
            goal_secs,
            variance_secs: total_secs.saturating_sub(goal_secs),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        seconds_to_hours(self.total_secs)
    }

    pub fn goal_hours(&self) -> f64 {
        seconds_to_hours(self.goal_secs)
    }

    pub fn variance_hours(&self) -> f64 {
        seconds_to_hours(self.variance_secs)
    }

    /// Average hours per worked day.
    pub fn average_hours(&self) -> f64 {
        if self.worked_days == 0 {
            0.0
        } else {
            self.total_hours() / self.worked_days as f64
        }
    }

    /// Worked days as a percentage of business days.
    pub fn worked_days_pct(&self) -> f64 {
        if self.business_days == 0 {
            0.0
        } else {
            self.worked_days as f64 / self.business_days as f64 * 100.0
        }
    }
}
