use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{hint, info};
use crate::utils::time::{DISPLAY_FORMAT, format_duration};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match TrackLogic::status(&pool)? {
        Some(active) => {
            let now = chrono::Local::now().naive_local();
            info(format!("Active session for '{}'", active.company));
            println!("   Started : {}", active.started_at.format(DISPLAY_FORMAT));
            println!("   Elapsed : {}", format_duration(active.elapsed_at(&now)));
        }
        None => {
            info("No active session.");
            hint("Use 'timetracker start <company>' to begin a new session.");
        }
    }
    Ok(())
}
