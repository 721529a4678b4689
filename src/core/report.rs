use crate::db::pool::DbPool;
use crate::db::queries::{RecordFilter, daily_totals, list_records};
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_balance;
use crate::utils::formatting::pad_right;
use crate::utils::table::{Column, Table};
use crate::utils::time::{DISPLAY_FORMAT, format_duration, format_signed_duration};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRow {
    pub date: NaiveDate,
    pub worked: i64,
    pub goal: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReport {
    pub rows: Vec<BalanceRow>,
    pub total_worked: i64,
    pub total_goal: i64,
    pub total_balance: i64,
}

/// Listing of completed records and the per-day goal balance.
pub struct ReportLogic;

impl ReportLogic {
    pub fn records(pool: &DbPool, filter: &RecordFilter) -> AppResult<Vec<TimeRecord>> {
        list_records(&pool.conn, filter)
    }

    /// Render the `show` table; returns the total of the listed durations.
    pub fn render_records(records: &[TimeRecord], separator: char) -> (String, i64) {
        let mut table = Table::new(
            vec![
                Column::new("COMPANY", 20),
                Column::new("START", 20),
                Column::new("END", 20),
                Column::new("DURATION", 10),
            ],
            separator,
        );

        let mut total = 0;
        for r in records {
            let secs = r.seconds();
            total += secs;
            table.add_row(vec![
                r.company.clone(),
                r.start.format(DISPLAY_FORMAT).to_string(),
                r.end
                    .map(|e| e.format(DISPLAY_FORMAT).to_string())
                    .unwrap_or_default(),
                format_duration(secs),
            ]);
        }

        let mut out = table.render();
        out.push_str(&table.separator_line());
        out.push('\n');
        out.push_str(&format!("Total: {}\n", format_duration(total)));
        (out, total)
    }

    pub fn show(pool: &DbPool, filter: &RecordFilter, separator: char) -> AppResult<()> {
        let records = Self::records(pool, filter)?;

        if records.is_empty() {
            info("No records found.");
            return Ok(());
        }

        let (text, _) = Self::render_records(&records, separator);
        println!();
        print!("{}", text);
        Ok(())
    }

    /// Worked vs goal for every day with completed records.
    pub fn balance(pool: &DbPool, company: Option<&str>, goal_secs: i64) -> AppResult<BalanceReport> {
        let days = daily_totals(&pool.conn, company)?;
        Ok(Self::balance_from_days(&days, goal_secs))
    }

    pub fn balance_from_days(days: &[(NaiveDate, i64)], goal_secs: i64) -> BalanceReport {
        let mut report = BalanceReport::default();

        for (date, worked) in days {
            let balance = worked - goal_secs;
            report.total_worked += worked;
            report.total_goal += goal_secs;
            report.rows.push(BalanceRow {
                date: *date,
                worked: *worked,
                goal: goal_secs,
                balance,
            });
        }
        report.total_balance = report.total_worked - report.total_goal;

        report
    }

    pub fn print_balance(report: &BalanceReport, separator: char) {
        if report.rows.is_empty() {
            info("No records found to compute a balance.");
            return;
        }

        let line = separator.to_string().repeat(64);

        println!();
        header("Daily balance");
        println!(
            "{}{}{}{}",
            pad_right("DATE", 16),
            pad_right("WORKED", 16),
            pad_right("GOAL", 16),
            "BALANCE"
        );
        println!("{}", line);

        for row in &report.rows {
            println!(
                "{}{}{}{}",
                pad_right(&row.date.format("%Y-%m-%d").to_string(), 16),
                pad_right(&format_duration(row.worked), 16),
                pad_right(&format_duration(row.goal), 16),
                colorize_balance(&format_signed_duration(row.balance), row.balance)
            );
        }

        println!("{}", line);
        println!(
            "{}{}{}{}",
            pad_right("Total", 16),
            pad_right(&format_duration(report.total_worked), 16),
            pad_right(&format_duration(report.total_goal), 16),
            colorize_balance(
                &format_signed_duration(report.total_balance),
                report.total_balance
            )
        );
    }
}
