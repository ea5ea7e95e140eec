use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::week_report;
use crate::db::pool::DbPool;
use crate::db::queries::{entries_by_date, load_entries_between};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREY, RESET, color_for_delta};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::format_minutes;
use chrono::Duration;

/// Show the Monday–Friday aggregate of the ISO week containing a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: date_arg } = cmd {
        let anchor = match date_arg {
            Some(s) => {
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
            }
            None => date::today(),
        };

        let monday = date::monday_of_week(anchor);
        let weekdays: Vec<_> = (0..5).map(|i| monday + Duration::days(i)).collect();
        let friday = weekdays[4];

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = entries_by_date(load_entries_between(&mut pool, &monday, &friday)?);

        let (iso_year, week_num) = date::iso_week_of(monday);
        let report = week_report(iso_year, week_num, &weekdays, &entries, &cfg.norm_policy());

        println!(
            "📅 Week {:02}/{} ({} → {})\n",
            report.week, report.iso_year, monday, friday
        );

        for day in &report.days {
            match (day.worked_minutes, day.delta_minutes) {
                (Some(w), Some(delta)) => println!(
                    "  {}  worked {:>6}  norm {:>6}  delta {}{:>7}{}",
                    day.date.format("%a %Y-%m-%d"),
                    mins2readable(w, false, true),
                    mins2readable(day.norm_minutes, false, true),
                    color_for_delta(delta),
                    format_minutes(delta),
                    RESET,
                ),
                _ => println!(
                    "  {}  {GREY}no data{RESET}         norm {:>6}",
                    day.date.format("%a %Y-%m-%d"),
                    mins2readable(day.norm_minutes, false, true),
                ),
            }
        }

        println!();
        match (report.total_worked, report.delta) {
            (Some(worked), Some(delta)) => {
                println!(
                    "Worked {} | Norm {} | Delta {}{}{}",
                    mins2readable(worked, false, true),
                    mins2readable(report.total_norm, false, true),
                    color_for_delta(delta),
                    format_minutes(delta),
                    RESET,
                );
            }
            _ => {
                println!(
                    "No data this week | Norm {}",
                    mins2readable(report.total_norm, false, true)
                );
            }
        }
    }
    Ok(())
}
