use crate::core::calculator::month::MonthRef;
use crate::db::repository::TimeRepository;
use crate::errors::AppResult;
use crate::models::day_entry::DayEntry;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySeconds {
    pub company: String,
    pub seconds: i64,
}

/// Seconds worked per day of month and company.
///
/// Within a day, companies keep the order in which they first appeared in
/// the input; `companies()` lists every company of the month in discovery
/// order. That order drives color assignment and tie-breaking downstream.
#[derive(Debug, Default, Clone)]
pub struct MonthAggregate {
    days: BTreeMap<u32, Vec<CompanySeconds>>,
    companies: Vec<String>,
}

impl MonthAggregate {
    /// Group flat rows. Rows for the same (day, company) are summed.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DayEntry>,
    {
        let mut agg = Self::default();

        for entry in entries {
            if !(1..=31).contains(&entry.day) {
                continue;
            }

            if !agg.companies.iter().any(|c| c == &entry.company) {
                agg.companies.push(entry.company.clone());
            }

            let day = agg.days.entry(entry.day).or_default();
            match day.iter_mut().find(|cs| cs.company == entry.company) {
                Some(cs) => cs.seconds += entry.seconds,
                None => day.push(CompanySeconds {
                    company: entry.company,
                    seconds: entry.seconds,
                }),
            }
        }

        agg
    }

    /// Companies worked on `day`, in discovery order (empty for idle days).
    pub fn day(&self, day: u32) -> &[CompanySeconds] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn day_total(&self, day: u32) -> i64 {
        self.day(day).iter().map(|cs| cs.seconds).sum()
    }

    /// Days with at least one row, ascending.
    pub fn days(&self) -> impl Iterator<Item = (u32, &[CompanySeconds])> {
        self.days.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    pub fn company_index(&self, company: &str) -> Option<usize> {
        self.companies.iter().position(|c| c == company)
    }

    pub fn total_seconds(&self) -> i64 {
        self.days.values().flatten().map(|cs| cs.seconds).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Query the month's completed records and group them.
pub fn aggregate_month(repo: &dyn TimeRepository, month: &MonthRef) -> AppResult<MonthAggregate> {
    let (start, end) = month.bounds();
    let entries = repo.records_in_range(start, end)?;
    Ok(MonthAggregate::from_entries(entries))
}
