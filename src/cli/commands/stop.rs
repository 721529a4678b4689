use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{DISPLAY_FORMAT, format_duration};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let now = chrono::Local::now().naive_local();

    let stopped = TrackLogic::stop(&pool, now)?;

    success(format!("Session stopped for '{}'", stopped.company));
    println!("   Start    : {}", stopped.started_at.format(DISPLAY_FORMAT));
    println!("   End      : {}", stopped.ended_at.format(DISPLAY_FORMAT));
    println!("   Duration : {}", format_duration(stopped.duration));
    Ok(())
}
