use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::{DayReport, day_report};
use crate::db::pool::DbPool;
use crate::db::queries::{entries_by_date, load_entries_between};
use crate::errors::{AppError, AppResult};
use crate::models::work_entry::WorkLogEntry;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_delta};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::format_minutes;
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = if *now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let first = *dates.first().expect("period resolution is never empty");
        let last = *dates.last().expect("period resolution is never empty");

        let entries = entries_by_date(load_entries_between(&mut pool, &first, &last)?);

        if entries.is_empty() {
            info(format!(
                "No work log entries between {} and {}.",
                first, last
            ));
            return Ok(());
        }

        let policy = cfg.norm_policy();

        println!("📅 Work log from {} to {}:\n", first, last);
        println!(
            "{:<12} {:>6} {:>6} {:>6} {:>8} {:>8} {:>8}",
            "Date", "In", "Out", "Break", "Worked", "Norm", "Delta"
        );

        let mut prev_month: Option<u32> = None;

        for d in &dates {
            // month separator between listing blocks
            if let Some(m) = prev_month
                && m != d.month()
            {
                println!("{}", cfg.separator_char.repeat(25));
            }
            prev_month = Some(d.month());

            let entry = entries.get(d);
            let report = day_report(*d, entry, &policy);
            print_day_row(&report, entry);
        }
    }
    Ok(())
}

fn print_day_row(report: &DayReport, entry: Option<&WorkLogEntry>) {
    let date_s = report.date.format("%Y-%m-%d").to_string();
    let norm_s = mins2readable(report.norm_minutes, false, true);

    match (entry, report.worked_minutes, report.delta_minutes) {
        (Some(e), Some(worked), Some(delta)) => {
            let color = color_for_delta(delta);
            println!(
                "{:<12} {:>6} {:>6} {:>6} {:>8} {:>8} {}{:>8}{}",
                date_s,
                e.start_str().unwrap_or_else(|| "-".into()),
                e.end_str().unwrap_or_else(|| "-".into()),
                e.break_minutes,
                mins2readable(worked, false, true),
                norm_s,
                color,
                format_minutes(delta),
                RESET,
            );
        }
        _ => {
            // no data: the delta is unknown, not zero
            println!(
                "{:<12} {GREY}{:>6} {:>6} {:>6} {:>8}{RESET} {:>8} {GREY}{:>8}{RESET}",
                date_s, "-", "-", "-", "-", norm_s, "-",
            );
        }
    }
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidDate);
    }

    date::current_month_dates().map_err(AppError::InvalidDate)
}
