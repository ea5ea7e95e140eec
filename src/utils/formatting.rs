//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Human-readable minute rendering with an explicit sign.
///
/// `short` gives `+02:25` / `-01:10`, otherwise `+02h 25m` / `-01h 10m`.
/// Zero carries no sign.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Render fractional hours for the leave reports, trimming trailing zeros
/// (`8.0` → `"8"`, `28.75` → `"28.75"`). Display-only; the ledger itself
/// keeps full precision.
pub fn hours2readable(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
