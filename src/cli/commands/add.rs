use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_entry, upsert_entry};
use crate::errors::{AppError, AppResult};
use crate::models::work_entry::WorkLogEntry;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add or update the work log entry for a date (upsert keyed on date).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse IN/OUT times (optional)
        //
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 3. Validate break
        //
        let break_arg = *break_minutes;
        if let Some(b) = break_arg
            && b < 0
        {
            return Err(AppError::InvalidValue(format!(
                "Break minutes must be >= 0, got {b}"
            )));
        }

        //
        // 4. Open DB
        //
        let pool = DbPool::new(&cfg.database)?;

        //
        // 5. Merge with the stored entry, if any: flags that were not
        //    passed leave the stored fields untouched.
        //
        let existing = get_entry(&pool.conn, &d)?;

        let merged = match existing {
            Some(prev) => WorkLogEntry {
                date: d,
                start: start_parsed.or(prev.start),
                end: end_parsed.or(prev.end),
                break_minutes: break_arg.unwrap_or(prev.break_minutes),
                notes: notes.clone().unwrap_or(prev.notes),
                created_at: prev.created_at,
                updated_at: chrono::Local::now().to_rfc3339(),
            },
            None => WorkLogEntry::new(
                d,
                start_parsed,
                end_parsed,
                break_arg.unwrap_or(0),
                notes.clone().unwrap_or_default(),
            ),
        };

        //
        // 6. Same-day rule: OUT must not precede IN. Overnight shifts are
        //    not supported.
        //
        if let (Some(s), Some(e)) = (merged.start, merged.end)
            && e < s
        {
            return Err(AppError::InvalidTime(
                "OUT must not be earlier than IN (overnight shifts are not supported).".into(),
            ));
        }

        //
        // 7. Persist (last write wins) and audit
        //
        upsert_entry(&pool.conn, &merged)?;
        let _ = ttlog(
            &pool.conn,
            "add",
            &merged.date_str(),
            "Work log entry upserted",
        );

        let start_s = merged.start_str().unwrap_or_else(|| "-".into());
        let end_s = merged.end_str().unwrap_or_else(|| "-".into());

        success(format!(
            "Saved {}: {} → {} (break {} min).",
            merged.date_str(),
            start_s,
            end_s,
            merged.break_minutes
        ));
    }

    Ok(())
}
