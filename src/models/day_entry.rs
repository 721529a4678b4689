/// Seconds worked for one company on one day of the queried month.
///
/// This is the flat row shape returned by the range query; grouping happens
/// in `core::calculator::aggregate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day: u32,
    pub company: String,
    pub seconds: i64,
}

impl DayEntry {
    pub fn new(day: u32, company: impl Into<String>, seconds: i64) -> Self {
        Self {
            day,
            company: company.into(),
            seconds,
        }
    }
}
