use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the internal audit log table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Audit { print: true }) {
        let pool = DbPool::new(&cfg.database)?;

        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{} | {:<12} | {}", date, operation, message);
        }
    }
    Ok(())
}
