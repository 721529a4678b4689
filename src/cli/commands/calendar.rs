use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::month::MonthRef;
use crate::core::logic::Core;
use crate::db::repository::SqliteRepository;
use crate::errors::AppResult;
use crate::tui::{render_calendar_text, run_calendar};
use crate::utils::date::today;

/// Width of the `--print` dump.
const PRINT_WIDTH: usize = 84;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { offset, print } = cmd {
        let goal = cfg.daily_goal_seconds()?;
        let repo = SqliteRepository::new(cfg.database.clone());

        if *print {
            let month = MonthRef::from_offset(today(), *offset)?;
            let view = Core::build_month_view(&repo, month, goal)?;
            print!("{}", render_calendar_text(&view, PRINT_WIDTH));
            return Ok(());
        }

        run_calendar(&repo, *offset, goal)?;
    }
    Ok(())
}
