//! Raw-mode terminal session and canvas painter.

use crate::errors::AppResult;
use crate::tui::canvas::{Canvas, Style};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue};
use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

/// Fallback when the terminal size cannot be read.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

pub enum Input {
    Key(KeyEvent),
    Resize,
    Timeout,
}

/// Raw mode plus alternate screen for as long as the value lives.
/// Dropping it restores the terminal, also when unwinding from an error.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn enter() -> AppResult<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self { out })
    }

    /// `(columns, rows)`.
    pub fn size(&self) -> (usize, usize) {
        let (w, h) = terminal::size().unwrap_or(DEFAULT_SIZE);
        (w as usize, h as usize)
    }

    /// Paint canvas rows `origin..origin + height` clipped to the terminal.
    pub fn paint(&mut self, canvas: &Canvas, origin: usize) -> AppResult<()> {
        let (width, height) = self.size();
        let mut w = BufWriter::with_capacity(8192, &mut self.out);

        queue!(w, ResetColor, Clear(ClearType::All))?;

        for screen_row in 0..height {
            let row = origin + screen_row;
            if row >= canvas.height() {
                break;
            }
            queue!(w, cursor::MoveTo(0, screen_row as u16))?;

            let mut current = Style::PLAIN;
            apply_style(&mut w, current)?;
            let mut line = String::new();

            for cell in canvas.row(row).iter().take(width) {
                if cell.ch == '\0' {
                    continue;
                }
                if cell.style != current {
                    if !line.is_empty() {
                        queue!(w, Print(&line))?;
                        line.clear();
                    }
                    apply_style(&mut w, cell.style)?;
                    current = cell.style;
                }
                line.push(cell.ch);
            }
            if !line.is_empty() {
                queue!(w, Print(&line))?;
            }
            queue!(w, SetAttribute(Attribute::Reset), ResetColor)?;
        }

        w.flush()?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press or a resize.
    pub fn next_input(&self, timeout: Duration) -> AppResult<Input> {
        if !event::poll(timeout)? {
            return Ok(Input::Timeout);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Input::Key(key)),
            Event::Resize(_, _) => Ok(Input::Resize),
            _ => Ok(Input::Timeout),
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

fn apply_style<W: Write>(w: &mut W, style: Style) -> io::Result<()> {
    queue!(
        w,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(style.fg.unwrap_or(Color::Reset)),
        SetBackgroundColor(style.bg.unwrap_or(Color::Reset))
    )?;
    if style.bold {
        queue!(w, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(w, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}
