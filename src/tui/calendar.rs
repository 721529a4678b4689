//! Month calendar drawn onto a `Canvas`.
//!
//! Layout, top to bottom: title, company legend, weekday header, one block
//! per week (day line plus three company lines, then a separator), the
//! monthly summary table and the additional statistics.

use crate::core::calculator::aggregate::CompanySeconds;
use crate::core::calculator::summary::{DayClass, TOP_PER_DAY, rank_day};
use crate::core::logic::MonthView;
use crate::tui::canvas::{Canvas, Style};
use crate::tui::palette::{company_color, company_text_color, day_class_colors};
use crate::utils::date::WEEKDAY_ABBREVS;
use crate::utils::formatting::{hours_col, percent_col, signed_hours, truncate_to_width};
use crate::utils::time::format_hm;
use crossterm::style::Color;

pub const MIN_CELL_WIDTH: usize = 6;
pub const CELL_HEIGHT: usize = 1 + TOP_PER_DAY;
pub const LEGEND_SLOT_WIDTH: usize = 30;

const NO_SESSIONS: &str = "No sessions recorded this month.";
const HELP_LINE: &str = "q: quit   p: previous month   n: next month   \
                         Up/Down PgUp/PgDn Home/End: scroll";

// Summary table columns.
const COL_COMPANY: usize = 2;
const COL_HOURS: usize = 22;
const COL_DAYS: usize = 32;
const COL_AVG: usize = 40;
const COL_SHARE: usize = 52;

/// Two-letter legend code: initials of the first two words, or the first two
/// letters of a single-word name.
pub fn abbreviation(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let abbr: String = match words.len() {
        0 => return "??".to_string(),
        1 => words[0].chars().take(2).collect(),
        _ => words.iter().take(2).filter_map(|w| w.chars().next()).collect(),
    };

    abbr.to_uppercase()
}

pub fn cell_width(canvas_width: usize) -> usize {
    (canvas_width / 7).max(MIN_CELL_WIDTH)
}

/// What one calendar cell shows below the day line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellLine<'a> {
    Company(&'a CompanySeconds),
    More(usize),
}

/// Up to three lines; with more than three companies the third line becomes
/// `+N more` where N counts the companies left out. The overflow line takes
/// the third company's slot, so N is `count - 2` rather than
/// `ranking.overflow` (which counts beyond the top three).
pub fn cell_lines(entries: &[CompanySeconds]) -> Vec<CellLine<'_>> {
    let ranking = rank_day(entries);

    if ranking.overflow == 0 {
        return ranking.top.into_iter().map(CellLine::Company).collect();
    }

    let shown = TOP_PER_DAY - 1;
    let mut lines: Vec<CellLine> = ranking
        .top
        .into_iter()
        .take(shown)
        .map(CellLine::Company)
        .collect();
    lines.push(CellLine::More(entries.len() - shown));
    lines
}

/// Draw the whole month. The canvas is `width` wide and at least
/// `min_height` rows tall.
pub fn render_calendar(view: &MonthView, width: usize, min_height: usize) -> Canvas {
    let width = width.max(cell_width(width) * 7);
    let mut canvas = Canvas::new(width, 1);
    let mut row = 0;

    let title = format!("WORK CALENDAR - {}", view.month.title());
    canvas.put_centered(row, &title, Style::fg(Color::Cyan).bold());
    row += 2;

    row = draw_legend(&mut canvas, view, row);
    row += 1;
    row = draw_grid(&mut canvas, view, row);
    row += 1;
    row = draw_summary(&mut canvas, view, row);
    row += 1;
    row = draw_statistics(&mut canvas, view, row);
    row += 1;

    canvas.ensure_height(row + 1);
    canvas.put_str(0, row, HELP_LINE, Style::PLAIN.dim());

    canvas.ensure_height(min_height);
    canvas
}

/// Plain-text dump of the calendar for non-interactive use.
pub fn render_calendar_text(view: &MonthView, width: usize) -> String {
    render_calendar(view, width, 0).to_plain_text()
}

fn draw_legend(canvas: &mut Canvas, view: &MonthView, mut row: usize) -> usize {
    canvas.ensure_height(row + 2);
    canvas.put_str(0, row, "COMPANIES:", Style::PLAIN.bold());
    row += 1;

    let companies = view.aggregate.companies();
    if companies.is_empty() {
        canvas.put_str(2, row, NO_SESSIONS, Style::PLAIN.dim());
        return row + 1;
    }

    let slots = (canvas.width() / LEGEND_SLOT_WIDTH).max(1);
    for (i, name) in companies.iter().enumerate() {
        let r = row + i / slots;
        let col = (i % slots) * LEGEND_SLOT_WIDTH;
        canvas.ensure_height(r + 1);

        let color = company_color(i);
        let code = format!(" {} ", abbreviation(name));
        let next = canvas.put_str(col, r, &code, Style::on(company_text_color(color), color).bold());
        let label = truncate_to_width(&format!("- {name}"), LEGEND_SLOT_WIDTH - (next - col) - 2);
        canvas.put_str(next + 1, r, &label, Style::PLAIN);
    }

    row + companies.len().div_ceil(slots)
}

fn draw_grid(canvas: &mut Canvas, view: &MonthView, mut row: usize) -> usize {
    let cw = cell_width(canvas.width());
    let weeks = view.month.weeks();

    canvas.ensure_height(row + 2 + weeks.len() * (CELL_HEIGHT + 1));

    for (c, name) in WEEKDAY_ABBREVS.iter().enumerate() {
        let style = if c >= 5 {
            Style::PLAIN.bold().dim()
        } else {
            Style::PLAIN.bold()
        };
        canvas.put_str(c * cw, row, name, style);
    }
    row += 1;
    canvas.hline(row, '=', Style::PLAIN.dim());
    row += 1;

    for week in &weeks {
        for (c, day) in week.iter().enumerate() {
            if let Some(day) = day {
                draw_cell(canvas, view, *day, c * cw, row, cw);
            }
        }
        row += CELL_HEIGHT;
        canvas.hline(row, '-', Style::PLAIN.dim());
        row += 1;
    }

    row
}

fn draw_cell(canvas: &mut Canvas, view: &MonthView, day: u32, col: usize, row: usize, cw: usize) {
    let inner = cw.saturating_sub(1);
    let entries = view.aggregate.day(day);
    let total = view.aggregate.day_total(day);

    let (text, style) = match day_class_colors(DayClass::classify(total)) {
        Some((fg, bg)) => (format!("{:02} ({})", day, format_hm(total)), Style::on(fg, bg).bold()),
        None => (format!("{:02}", day), Style::PLAIN),
    };
    canvas.put_str(col, row, &truncate_to_width(&text, inner), style);

    for (i, line) in cell_lines(entries).into_iter().enumerate() {
        let r = row + 1 + i;
        match line {
            CellLine::Company(cs) => {
                let idx = view.aggregate.company_index(&cs.company).unwrap_or(0);
                let abbr = abbreviation(&cs.company);
                let next = canvas.put_str(col, r, &abbr, Style::fg(company_color(idx)).bold());
                let rest = truncate_to_width(
                    &format!(" {}", format_hm(cs.seconds)),
                    inner.saturating_sub(next - col),
                );
                canvas.put_str(next, r, &rest, Style::PLAIN);
            }
            CellLine::More(n) => {
                let text = truncate_to_width(&format!("+{n} more"), inner);
                canvas.put_str(col, r, &text, Style::PLAIN.dim());
            }
        }
    }
}

fn draw_summary(canvas: &mut Canvas, view: &MonthView, mut row: usize) -> usize {
    let summary = &view.summary;
    canvas.ensure_height(row + 5 + summary.companies.len());

    canvas.put_str(0, row, "MONTHLY SUMMARY:", Style::PLAIN.bold());
    row += 1;

    if summary.is_empty() {
        canvas.put_str(COL_COMPANY, row, NO_SESSIONS, Style::PLAIN.dim());
        return row + 1;
    }

    let head = Style::PLAIN.bold();
    canvas.put_str(COL_COMPANY, row, "COMPANY", head);
    canvas.put_str(COL_HOURS, row, "HOURS", head);
    canvas.put_str(COL_DAYS, row, "DAYS", head);
    canvas.put_str(COL_AVG, row, "AVG/DAY", head);
    canvas.put_str(COL_SHARE, row, "SHARE", head);
    row += 1;
    canvas.hline(row, '-', Style::PLAIN.dim());
    row += 1;

    for stats in &summary.companies {
        let name = truncate_to_width(&stats.name, COL_HOURS - COL_COMPANY - 1);
        canvas.put_str(
            COL_COMPANY,
            row,
            &name,
            Style::fg(company_color(stats.discovery_index)),
        );
        canvas.put_str(COL_HOURS, row, &hours_col(stats.hours()), Style::PLAIN);
        canvas.put_str(COL_DAYS, row, &format!("{:>4}", stats.active_days), Style::PLAIN);
        canvas.put_str(COL_AVG, row, &hours_col(stats.average_hours()), Style::PLAIN);
        canvas.put_str(
            COL_SHARE,
            row,
            &percent_col(stats.share_pct(summary.total_secs)),
            Style::PLAIN,
        );
        row += 1;
    }

    canvas.hline(row, '-', Style::PLAIN.dim());
    row += 1;

    let total_share = if summary.total_secs > 0 { 100.0 } else { 0.0 };
    canvas.put_str(COL_COMPANY, row, "TOTAL", head);
    canvas.put_str(COL_HOURS, row, &hours_col(summary.total_hours()), head);
    canvas.put_str(COL_DAYS, row, &format!("{:>4}", summary.worked_days), head);
    canvas.put_str(COL_AVG, row, &hours_col(summary.average_hours()), head);
    canvas.put_str(COL_SHARE, row, &percent_col(total_share), head);

    row + 1
}

fn draw_statistics(canvas: &mut Canvas, view: &MonthView, mut row: usize) -> usize {
    let s = &view.summary;
    canvas.ensure_height(row + 5);

    canvas.put_str(0, row, "ADDITIONAL STATISTICS:", Style::PLAIN.bold());
    row += 1;

    let lines = [
        ("Business days:", format!("{}", s.business_days)),
        (
            "Days worked:",
            format!("{} ({:.2}%)", s.worked_days, s.worked_days_pct()),
        ),
        ("Monthly goal:", format!("{:.2}h", s.goal_hours())),
    ];
    for (label, value) in &lines {
        canvas.put_str(COL_COMPANY, row, label, Style::PLAIN);
        canvas.put_str(COL_HOURS, row, value, Style::PLAIN);
        row += 1;
    }

    let color = if s.variance_secs >= 0 {
        Color::Green
    } else {
        Color::Red
    };
    canvas.put_str(COL_COMPANY, row, "Balance:", Style::PLAIN);
    canvas.put_str(
        COL_HOURS,
        row,
        &signed_hours(s.variance_hours()),
        Style::fg(color).bold(),
    );

    row + 1
}
