//! Full-screen terminal views: the month calendar and the live monitor.

pub mod calendar;
pub mod canvas;
pub mod monitor;
pub mod pager;
pub mod palette;
pub mod terminal;
pub mod viewport;

pub use calendar::render_calendar_text;
pub use monitor::run_monitor;
pub use pager::run_calendar;
