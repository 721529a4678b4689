use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::queries::RecordFilter;
use crate::errors::AppResult;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { company, from, to } = cmd {
        let filter = RecordFilter {
            company: company.clone(),
            from: from.as_deref().map(parse_date).transpose()?,
            to: to.as_deref().map(parse_date).transpose()?,
        };

        let pool = DbPool::new(&cfg.database)?;
        ReportLogic::show(&pool, &filter, cfg.separator())?;
    }
    Ok(())
}
