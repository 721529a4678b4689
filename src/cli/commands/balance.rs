use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::parse_goal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { company, goal } = cmd {
        let goal_secs = match goal {
            Some(g) => parse_goal(g)?,
            None => cfg.daily_goal_seconds()?,
        };

        let pool = DbPool::new(&cfg.database)?;
        let report = ReportLogic::balance(&pool, company.as_deref(), goal_secs)?;
        ReportLogic::print_balance(&report, cfg.separator());
    }
    Ok(())
}
