use crate::errors::{AppError, AppResult};
use crate::utils::date::month_name;
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// A calendar month in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    first: NaiveDate,
    next_first: NaiveDate,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidMonth(format!("{:02}/{}", month, year)))?;
        Self::from_first(first)
    }

    fn from_first(first: NaiveDate) -> AppResult<Self> {
        let next_first = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| AppError::InvalidMonth(first.format("%m/%Y").to_string()))?;
        Ok(Self { first, next_first })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> AppResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// The month `offset` months away from the one containing `base`
    /// (0 = same month, -1 = previous, 1 = next).
    pub fn from_offset(base: NaiveDate, offset: i32) -> AppResult<Self> {
        Self::containing(base)?.shifted(offset)
    }

    pub fn shifted(&self, delta: i32) -> AppResult<Self> {
        let months = Months::new(delta.unsigned_abs());
        let first = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };
        let first = first.ok_or_else(|| {
            AppError::InvalidMonth(format!("{} months from {}", delta, self.first.format("%m/%Y")))
        })?;
        Self::from_first(first)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn days_in_month(&self) -> u32 {
        (self.next_first - self.first).num_days() as u32
    }

    /// Half-open local range `[first 00:00, next month first 00:00)`.
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (
            self.first.and_time(NaiveTime::MIN),
            self.next_first.and_time(NaiveTime::MIN),
        )
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.with_day(day)
    }

    pub fn weekday(&self, day: u32) -> Option<Weekday> {
        self.date(day).map(|d| d.weekday())
    }

    /// Monday-first week rows; `None` pads days outside the month.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let lead = self.first.weekday().num_days_from_monday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = lead;

        for day in 1..=self.days_in_month() {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }

        weeks
    }

    /// Days falling Monday to Friday.
    pub fn business_days(&self) -> u32 {
        (1..=self.days_in_month())
            .filter(|d| {
                self.weekday(*d)
                    .is_some_and(|w| w.num_days_from_monday() < 5)
            })
            .count() as u32
    }

    /// `MARCH 2024`
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month()).to_uppercase(), self.year())
    }
}
