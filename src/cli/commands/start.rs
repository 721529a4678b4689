use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::DISPLAY_FORMAT;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { company } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let now = chrono::Local::now().naive_local();

        let session = TrackLogic::start(&pool, company, now)?;

        success(format!(
            "Session started for '{}' at {}",
            session.company,
            session.started_at.format(DISPLAY_FORMAT)
        ));
    }
    Ok(())
}
