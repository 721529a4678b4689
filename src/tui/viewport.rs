/// Vertical window over a canvas taller than the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    content_height: usize,
    viewport_height: usize,
    origin: usize,
}

impl Viewport {
    pub fn new(content_height: usize, viewport_height: usize) -> Self {
        Self {
            content_height,
            viewport_height,
            origin: 0,
        }
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Largest valid origin.
    pub fn max_origin(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Half a viewport, at least one row.
    pub fn page_size(&self) -> usize {
        (self.viewport_height / 2).max(1)
    }

    /// Move to `origin` clamped into `[0, max_origin]`; true when it moved.
    pub fn scroll_to(&mut self, origin: usize) -> bool {
        let clamped = origin.min(self.max_origin());
        let moved = clamped != self.origin;
        self.origin = clamped;
        moved
    }

    pub fn scroll_up(&mut self, rows: usize) -> bool {
        self.scroll_to(self.origin.saturating_sub(rows))
    }

    pub fn scroll_down(&mut self, rows: usize) -> bool {
        self.scroll_to(self.origin.saturating_add(rows))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.page_size())
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.page_size())
    }

    pub fn home(&mut self) -> bool {
        self.scroll_to(0)
    }

    pub fn end(&mut self) -> bool {
        self.scroll_to(self.max_origin())
    }

    /// Visible canvas rows as `origin..origin + viewport_height`, clipped.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        let end = (self.origin + self.viewport_height).min(self.content_height);
        self.origin..end
    }
}
