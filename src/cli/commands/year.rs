use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::year_report;
use crate::db::pool::DbPool;
use crate::db::queries::{
    carry_over_minutes_or_zero, entries_by_date, load_entries_for_year,
};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_delta};
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::format_minutes;
use chrono::Datelike;

/// Yearly report: one row per ISO week with the running cumulative balance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Year { year } = cmd {
        let y = (*year).unwrap_or_else(|| date::today().year());

        let mut pool = DbPool::new(&cfg.database)?;

        let entries = entries_by_date(load_entries_for_year(&mut pool, y)?);
        let carry_over = carry_over_minutes_or_zero(&pool.conn, y)?;

        let report = year_report(y, &entries, carry_over, &cfg.norm_policy());

        println!("📅 Overtime ledger for year {}\n", y);
        println!(
            "Carry-over from previous years: {}",
            format_minutes(report.carry_over_minutes)
        );
        println!();
        println!(
            "{:<10} {:>8} {:>8} {:>8} {:>10}",
            "Week", "Worked", "Norm", "Delta", "Cumulative"
        );

        for yw in &report.weeks {
            let w = &yw.report;
            let label = format!("{:02}/{}", w.week, w.iso_year);

            match (w.total_worked, w.delta) {
                (Some(worked), Some(delta)) => println!(
                    "{:<10} {:>8} {:>8} {}{:>8}{} {:>10}",
                    label,
                    mins2readable(worked, false, true),
                    mins2readable(w.total_norm, false, true),
                    color_for_delta(delta),
                    format_minutes(delta),
                    RESET,
                    format_minutes(yw.cumulative_minutes),
                ),
                _ => println!(
                    "{:<10} {GREY}{:>8}{RESET} {:>8} {GREY}{:>8}{RESET} {:>10}",
                    label,
                    "-",
                    mins2readable(w.total_norm, false, true),
                    "-",
                    format_minutes(yw.cumulative_minutes),
                ),
            }
        }

        println!();
        info(format!(
            "Year balance: {} ({} weeks with data)",
            format_minutes(report.balance_minutes),
            report.weeks.iter().filter(|w| w.report.has_entries()).count(),
        ));
    }
    Ok(())
}
