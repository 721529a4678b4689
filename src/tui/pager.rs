//! Month navigation and scrolling for the interactive calendar.

use crate::core::calculator::month::MonthRef;
use crate::core::logic::Core;
use crate::db::repository::TimeRepository;
use crate::errors::AppResult;
use crate::tui::calendar::render_calendar;
use crate::tui::terminal::{Input, TerminalSession};
use crate::tui::viewport::Viewport;
use crate::utils::date::today;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

const INPUT_TIMEOUT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    Quit,
    PrevMonth,
    NextMonth,
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Home,
    End,
    Ignore,
}

impl PagerAction {
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return PagerAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => PagerAction::Quit,
            KeyCode::Char('p') => PagerAction::PrevMonth,
            KeyCode::Char('n') => PagerAction::NextMonth,
            KeyCode::Up => PagerAction::LineUp,
            KeyCode::Down => PagerAction::LineDown,
            KeyCode::PageUp => PagerAction::PageUp,
            KeyCode::PageDown => PagerAction::PageDown,
            KeyCode::Home => PagerAction::Home,
            KeyCode::End => PagerAction::End,
            _ => PagerAction::Ignore,
        }
    }
}

/// Outcome of one key while the calendar is interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay on the current month; repaint when the origin moved.
    Stay { redraw: bool },
    /// Render the month at this offset from the current one.
    Navigate(i32),
    Exit,
}

#[derive(Debug, Clone)]
pub struct Pager {
    offset: i32,
    viewport: Viewport,
}

impl Pager {
    pub fn new(offset: i32, viewport: Viewport) -> Self {
        Self { offset, viewport }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn handle(&mut self, action: PagerAction) -> Transition {
        let v = &mut self.viewport;
        let redraw = match action {
            PagerAction::Quit => return Transition::Exit,
            PagerAction::PrevMonth => return Transition::Navigate(self.offset - 1),
            PagerAction::NextMonth => return Transition::Navigate(self.offset + 1),
            PagerAction::LineUp => v.scroll_up(1),
            PagerAction::LineDown => v.scroll_down(1),
            PagerAction::PageUp => v.page_up(),
            PagerAction::PageDown => v.page_down(),
            PagerAction::Home => v.home(),
            PagerAction::End => v.end(),
            PagerAction::Ignore => false,
        };
        Transition::Stay { redraw }
    }
}

/// Interactive calendar starting `offset` months from the current one.
/// Returns when the user quits.
pub fn run_calendar(repo: &dyn TimeRepository, offset: i32, daily_goal_secs: i64) -> AppResult<()> {
    let mut session = TerminalSession::enter()?;
    let mut offset = offset;

    'render: loop {
        let month = MonthRef::from_offset(today(), offset)?;
        let view = Core::build_month_view(repo, month, daily_goal_secs)?;

        let (width, height) = session.size();
        let canvas = render_calendar(&view, width, height);
        let mut pager = Pager::new(offset, Viewport::new(canvas.height(), height));
        session.paint(&canvas, 0)?;

        loop {
            let key = match session.next_input(INPUT_TIMEOUT)? {
                Input::Timeout => continue,
                Input::Resize => continue 'render,
                Input::Key(key) => key,
            };

            match pager.handle(PagerAction::from_key(&key)) {
                Transition::Stay { redraw: true } => {
                    session.paint(&canvas, pager.viewport().origin())?
                }
                Transition::Stay { redraw: false } => {}
                Transition::Navigate(next) => {
                    offset = next;
                    continue 'render;
                }
                Transition::Exit => return Ok(()),
            }
        }
    }
}
