use crate::db::pool::DbPool;
use crate::db::queries::load_entries_between;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use crate::utils::date::{generate_from_period, generate_range};
use crate::utils::path::is_absolute;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export work log entries.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let (start, end) = resolve_range(range)?;
        let entries = load_entries_between(pool, &start, &end)?;

        if entries.is_empty() {
            warning("No work log entries in the selected range.");
        }

        let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Xlsx => export_xlsx(&rows, path),
        }
    }
}

/// Resolve a range expression to inclusive start/end dates.
/// `None` and `"all"` cover everything.
fn resolve_range(range: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    let all = (
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
    );

    let Some(expr) = range else {
        return Ok(all);
    };

    if expr == "all" {
        return Ok(all);
    }

    let dates = if let Some((a, b)) = expr.split_once(':') {
        generate_range(a, b).map_err(AppError::InvalidDate)?
    } else {
        generate_from_period(expr).map_err(AppError::InvalidDate)?
    };

    Ok((*dates.first().unwrap(), *dates.last().unwrap()))
}
