use crate::config::Config;
use crate::db::repository::SqliteRepository;
use crate::errors::AppResult;
use crate::tui::run_monitor;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let goal = cfg.daily_goal_seconds()?;
    let repo = SqliteRepository::new(cfg.database.clone());
    run_monitor(&repo, goal)
}
