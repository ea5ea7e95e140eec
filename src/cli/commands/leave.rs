use crate::cli::parser::{Commands, LeaveCommands};
use crate::config::Config;
use crate::core::ledger::compute_leave_stats;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_leave_entry, get_leave_balance, insert_leave_entry, load_leave_entries,
    upsert_leave_balance,
};
use crate::errors::{AppError, AppResult};
use crate::models::leave::{LeaveBalance, LeaveEntry};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::hours2readable;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            LeaveCommands::Set {
                year,
                base_days,
                purchased_days,
                carry_over_hours,
                adjustment_hours,
                hours_per_day,
            } => {
                let y = (*year).unwrap_or_else(|| date::today().year());

                // unspecified flags keep the stored (or default) values
                let prev = get_leave_balance(&pool.conn, y)?
                    .unwrap_or_else(|| LeaveBalance::defaults_for(y));

                let balance = LeaveBalance {
                    year: y,
                    base_days: base_days.unwrap_or(prev.base_days),
                    purchased_days: purchased_days.unwrap_or(prev.purchased_days),
                    carry_over_hours: carry_over_hours.unwrap_or(prev.carry_over_hours),
                    manual_adjustment_hours: adjustment_hours
                        .unwrap_or(prev.manual_adjustment_hours),
                    hours_per_day: hours_per_day.unwrap_or(prev.hours_per_day),
                };

                // the ledger divides by this; keep zero and negatives out of the store
                if balance.hours_per_day <= 0.0 {
                    return Err(AppError::InvalidValue(format!(
                        "hours-per-day must be positive, got {}",
                        balance.hours_per_day
                    )));
                }
                if balance.base_days < 0.0 || balance.purchased_days < 0.0 {
                    return Err(AppError::InvalidValue(
                        "base-days and purchased-days must be >= 0".into(),
                    ));
                }

                upsert_leave_balance(&pool.conn, &balance)?;
                let _ = ttlog(
                    &pool.conn,
                    "leave_set",
                    &y.to_string(),
                    "Leave balance upserted",
                );

                success(format!(
                    "Leave balance for {}: {} base + {} purchased days, {}h/day.",
                    y,
                    hours2readable(balance.base_days),
                    hours2readable(balance.purchased_days),
                    hours2readable(balance.hours_per_day),
                ));
            }

            LeaveCommands::Add {
                date: date_s,
                hours,
                description,
            } => {
                let d = date::parse_date(date_s)
                    .ok_or_else(|| AppError::InvalidDate(date_s.to_string()))?;

                if *hours <= 0.0 {
                    return Err(AppError::InvalidValue(format!(
                        "Leave hours must be positive, got {hours}"
                    )));
                }

                let entry = LeaveEntry {
                    id: 0,
                    date: d,
                    hours: *hours,
                    description: description.clone().unwrap_or_default(),
                };

                insert_leave_entry(&pool.conn, &entry)?;
                let _ = ttlog(&pool.conn, "leave_add", date_s, "Leave entry added");

                success(format!("Logged {} leave hours on {}.", hours, date_s));
            }

            LeaveCommands::Del { id } => {
                let removed = delete_leave_entry(&pool.conn, *id)?;
                if removed == 0 {
                    return Err(AppError::NoLeaveEntry(*id));
                }

                let _ = ttlog(
                    &pool.conn,
                    "leave_del",
                    &id.to_string(),
                    "Leave entry deleted",
                );
                info(format!("Deleted leave entry {}", id));
            }

            LeaveCommands::List { year } => {
                let y = year.unwrap_or_else(|| date::today().year());
                let entries = load_leave_entries(&mut pool, y)?;

                if entries.is_empty() {
                    info(format!("No leave entries for {}.", y));
                    return Ok(());
                }

                println!("🌴 Leave entries for {}:\n", y);
                for e in &entries {
                    println!(
                        "  [{:>3}] {}  {:>5}h  {}",
                        e.id,
                        e.date,
                        hours2readable(e.hours),
                        e.description
                    );
                }
            }

            LeaveCommands::Stats { year } => {
                let y = year.unwrap_or_else(|| date::today().year());

                let balance = get_leave_balance(&pool.conn, y)?;
                let entries = load_leave_entries(&mut pool, y)?;

                let stats = compute_leave_stats(balance.as_ref(), &entries);

                println!("🌴 Leave statistics for {}\n", y);
                if balance.is_none() {
                    println!("(no balance stored: using defaults, 25 days at 8h/day)\n");
                }
                println!(
                    "Entitlement: {} days ({} h)",
                    hours2readable(stats.entitlement_days),
                    hours2readable(stats.entitlement_hours)
                );
                println!(
                    "Taken:       {} days ({} h)",
                    hours2readable(stats.taken_days),
                    hours2readable(stats.taken_hours)
                );
                println!(
                    "Remaining:   {} days ({} h)",
                    hours2readable(stats.remaining_days),
                    hours2readable(stats.remaining_hours)
                );
            }
        }
    }
    Ok(())
}
