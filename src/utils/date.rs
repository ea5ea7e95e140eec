use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().unwrap();
    let end_date = *e.last().unwrap();

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    Ok(out)
}

pub fn current_month_dates() -> Result<Vec<NaiveDate>, String> {
    let today = today();
    Ok(all_days_of_month(today.year(), today.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}

pub fn is_weekday(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All Monday–Friday dates of the calendar year, ascending.
pub fn weekdays_of_year(year: i32) -> Vec<NaiveDate> {
    all_days_of_year(year)
        .into_iter()
        .filter(|d| is_weekday(*d))
        .collect()
}

/// ISO-8601 (year, week) key for a date. Weeks start Monday; week 1 is the
/// week containing the year's first Thursday. The ISO year can differ from
/// the calendar year around January 1st.
pub fn iso_week_of(d: NaiveDate) -> (i32, u32) {
    let iw = d.iso_week();
    (iw.year(), iw.week())
}

/// Bucket a day sequence into ISO (year, week) groups, preserving the input
/// order. Each group's key comes from its first contained day.
pub fn group_by_iso_week(days: &[NaiveDate]) -> Vec<((i32, u32), Vec<NaiveDate>)> {
    let mut out: Vec<((i32, u32), Vec<NaiveDate>)> = Vec::new();

    for d in days {
        let key = iso_week_of(*d);
        match out.last_mut() {
            Some((k, bucket)) if *k == key => bucket.push(*d),
            _ => out.push((key, vec![*d])),
        }
    }

    out
}

/// The Monday of the ISO week containing the date.
pub fn monday_of_week(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_monday() as i64;
    d - chrono::Duration::days(back)
}
