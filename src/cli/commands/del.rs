use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use std::io::{Write, stdin, stdout};

/// Delete the work log entry for a date, after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let pool = DbPool::new(&cfg.database)?;

        print!("Delete work log entry for {}? [y/N]: ", date);
        stdout().flush().ok();

        let mut answer = String::new();
        stdin().read_line(&mut answer)?;

        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            info("Deletion cancelled.");
            return Ok(());
        }

        let removed = delete_entry(&pool.conn, &d)?;

        if removed == 0 {
            println!("No work log entry found for date {}", date);
            return Ok(());
        }

        let _ = ttlog(&pool.conn, "del", date, "Work log entry deleted");

        info(format!("Deleted work log entry for {}", date));
    }

    Ok(())
}
