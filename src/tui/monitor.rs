//! Live view of the running session, refreshed every second.

use crate::db::repository::TimeRepository;
use crate::errors::AppResult;
use crate::models::session::ActiveSession;
use crate::tui::canvas::{Canvas, Style};
use crate::tui::pager::PagerAction;
use crate::tui::terminal::{Input, TerminalSession};
use crate::utils::time::{DISPLAY_FORMAT, format_duration};
use chrono::NaiveDateTime;
use crossterm::style::Color;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Columns reserved around the progress bar.
const BAR_MARGIN: usize = 20;

pub const IDLE_MESSAGE: &str = "No active session.";
pub const IDLE_HINT: &str = "Use 'timetracker start <company>' to begin a new session.";

/// `(filled, percent)` of a `width`-cell bar for `elapsed` against `goal`.
/// A non-positive goal counts as already reached.
pub fn progress(elapsed: i64, goal: i64, width: usize) -> (usize, u32) {
    let elapsed = elapsed.max(0);
    if goal <= 0 {
        return (width, 100);
    }

    let filled = (elapsed as i128 * width as i128 / goal as i128).min(width as i128) as usize;
    let percent = (elapsed as i128 * 100 / goal as i128).min(100) as u32;
    (filled, percent)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStatus {
    pub company: String,
    pub started_at: NaiveDateTime,
    pub elapsed: String,
    pub filled: usize,
    pub percent: u32,
}

impl LiveStatus {
    pub fn evaluate(
        session: &ActiveSession,
        now: &NaiveDateTime,
        daily_goal_secs: i64,
        bar_width: usize,
    ) -> Self {
        let secs = session.elapsed_at(now);
        let (filled, percent) = progress(secs, daily_goal_secs, bar_width);

        Self {
            company: session.company.clone(),
            started_at: session.started_at,
            elapsed: format_duration(secs),
            filled,
            percent,
        }
    }

    pub fn bar(&self, bar_width: usize) -> String {
        let filled = self.filled.min(bar_width);
        format!(
            "[{}{}] {}%",
            "=".repeat(filled),
            " ".repeat(bar_width - filled),
            self.percent
        )
    }
}

pub fn bar_width(terminal_width: usize) -> usize {
    terminal_width.saturating_sub(BAR_MARGIN)
}

pub fn render_monitor(
    session: Option<&ActiveSession>,
    now: &NaiveDateTime,
    daily_goal_secs: i64,
    width: usize,
    height: usize,
) -> Canvas {
    let mut canvas = Canvas::new(width, height.max(14));

    canvas.put_centered(1, "TIMETRACKER MONITOR", Style::fg(Color::Cyan).bold());
    canvas.put_centered(2, &now.format(DISPLAY_FORMAT).to_string(), Style::PLAIN.dim());

    let next = canvas.put_str(2, 4, "Status: ", Style::PLAIN.bold());

    match session {
        Some(active) => {
            let bw = bar_width(width);
            let live = LiveStatus::evaluate(active, now, daily_goal_secs, bw);

            canvas.put_str(next, 4, "ACTIVE", Style::fg(Color::Green).bold());
            canvas.put_str(2, 6, &format!("Company:  {}", live.company), Style::PLAIN);
            canvas.put_str(
                2,
                7,
                &format!("Started:  {}", live.started_at.format(DISPLAY_FORMAT)),
                Style::PLAIN,
            );
            canvas.put_str(
                2,
                8,
                &format!("Elapsed:  {}", live.elapsed),
                Style::PLAIN.bold(),
            );
            canvas.put_str(2, 10, "Daily goal progress:", Style::PLAIN);
            canvas.put_str(2, 11, &live.bar(bw), Style::fg(Color::Green));
        }
        None => {
            canvas.put_str(next, 4, "IDLE", Style::fg(Color::Red).bold());
            canvas.put_str(2, 6, IDLE_MESSAGE, Style::PLAIN);
            canvas.put_str(2, 7, IDLE_HINT, Style::PLAIN.dim());
        }
    }

    let footer = canvas.height().saturating_sub(3).max(13);
    canvas.put_str(2, footer, "Press 'q' to quit", Style::PLAIN.dim());
    canvas
}

/// Refresh the session view every second until `q`, Esc or Ctrl+C.
pub fn run_monitor(repo: &dyn TimeRepository, daily_goal_secs: i64) -> AppResult<()> {
    let mut session = TerminalSession::enter()?;

    loop {
        let active = repo.active_session()?;
        let now = chrono::Local::now().naive_local();
        let (width, height) = session.size();

        let canvas = render_monitor(active.as_ref(), &now, daily_goal_secs, width, height);
        session.paint(&canvas, 0)?;

        if let Input::Key(key) = session.next_input(TICK)?
            && PagerAction::from_key(&key) == PagerAction::Quit
        {
            return Ok(());
        }
    }
}
