//! Off-screen character grid the calendar and monitor draw into.
//!
//! The canvas is never clipped to the terminal: it is as tall as its content
//! and the painter only copies the visible slice.

use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        fg: None,
        bg: None,
        bold: false,
        dim: false,
    };

    pub fn fg(color: Color) -> Self {
        Style {
            fg: Some(color),
            ..Self::PLAIN
        }
    }

    pub fn on(fg: Color, bg: Color) -> Self {
        Style {
            fg: Some(fg),
            bg: Some(bg),
            ..Self::PLAIN
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            style: Style::PLAIN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Grow to at least `height` rows; never shrinks.
    pub fn ensure_height(&mut self, height: usize) {
        if height > self.height {
            self.cells.resize(self.width * height, Cell::default());
            self.height = height;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.width && row < self.height {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.height {
            return &[];
        }
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char, style: Style) {
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = Cell { ch, style };
        }
    }

    /// Write `text` from `(col, row)`; anything past the right edge is dropped.
    /// Returns the column after the last written character.
    pub fn put_str(&mut self, col: usize, row: usize, text: &str, style: Style) -> usize {
        let mut x = col;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if x + w > self.width {
                break;
            }
            self.set(x, row, ch, style);
            // Wide glyphs occupy the following cell too.
            for extra in 1..w {
                self.set(x + extra, row, '\0', style);
            }
            x += w;
        }
        x
    }

    /// Write `text` centered on `row`.
    pub fn put_centered(&mut self, row: usize, text: &str, style: Style) {
        let len = unicode_width::UnicodeWidthStr::width(text);
        let col = self.width.saturating_sub(len) / 2;
        self.put_str(col, row, text, style);
    }

    pub fn hline(&mut self, row: usize, ch: char, style: Style) {
        for col in 0..self.width {
            self.set(col, row, ch, style);
        }
    }

    /// One text line per row, trailing blanks trimmed, styles dropped.
    pub fn row_text(&self, row: usize) -> String {
        let line: String = self
            .row(row)
            .iter()
            .filter(|c| c.ch != '\0')
            .map(|c| c.ch)
            .collect();
        line.trim_end().to_string()
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            out.push_str(&self.row_text(row));
            out.push('\n');
        }
        out
    }
}
