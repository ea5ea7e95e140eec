use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_carry_over, upsert_carry_over};
use crate::errors::{AppError, AppResult};
use crate::models::carry_over::CarryOver;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::time::{format_minutes, parse_signed_minutes};
use chrono::Datelike;

/// Show or set the overtime carry-over seeding a year's cumulative balance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Carryover {
        year,
        set,
        set_time,
    } = cmd
    {
        let y = (*year).unwrap_or_else(|| date::today().year());

        let pool = DbPool::new(&cfg.database)?;

        let minutes = match (set, set_time) {
            (Some(m), _) => Some(*m),
            (None, Some(s)) => Some(
                parse_signed_minutes(s)
                    .ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
            ),
            (None, None) => None,
        };

        if let Some(m) = minutes {
            upsert_carry_over(&pool.conn, &CarryOver { year: y, minutes: m })?;
            let _ = ttlog(
                &pool.conn,
                "carryover",
                &y.to_string(),
                &format!("Carry-over set to {} minutes", m),
            );

            success(format!(
                "Carry-over for {} set to {} ({} min).",
                y,
                format_minutes(m),
                m
            ));
            return Ok(());
        }

        match get_carry_over(&pool.conn, y)? {
            Some(c) => info(format!(
                "Carry-over for {}: {} ({} min)",
                y,
                format_minutes(c.minutes),
                c.minutes
            )),
            None => info(format!("No carry-over stored for {} (defaults to 0:00).", y)),
        }
    }
    Ok(())
}
