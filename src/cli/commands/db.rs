use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            init_db(&pool.conn)?;
            success("Migrations up to date.");
            return Ok(());
        }

        if *check {
            let status: String = pool
                .conn
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

            if status == "ok" {
                success("Database integrity: ok");
            } else {
                return Err(AppError::Migration(format!(
                    "Integrity check failed: {status}"
                )));
            }
            return Ok(());
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database vacuumed.");
            return Ok(());
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
            return Ok(());
        }

        warning("Nothing to do: specify --migrate, --check, --vacuum or --info.");
    }

    Ok(())
}
