//! ISO week resolution and portal date-key handling.
//!
//! The portal keys weeks as `"{isoYear}-w-{isoWeek:02}"` and days as
//! `"dd-MM-yyyy"` strings. Weeks start on Monday per ISO 8601, which also
//! means the year in the week key is the ISO week-based year and can differ
//! from the calendar year around January 1st.
//!
//! Date-key classification helpers never fail: a key that does not parse is
//! simply not past, not today, not a weekend. The dashboard keeps rendering
//! whatever the portal sent.

use chrono::{Datelike, Duration, Locale, NaiveDate, Weekday};

const DATE_KEY_FORMAT: &str = "%d-%m-%Y";

/// Builds the portal week key for the week containing `date`.
///
/// Uses the ISO week number and ISO week-based year, zero-padding the week
/// so keys sort lexicographically within a year ("2026-w-07" < "2026-w-10").
pub fn current_week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-w-{:02}", iso.year(), iso.week())
}

/// Returns the seven portal date keys for the week containing `date`.
///
/// Keys run Monday through Sunday in "dd-MM-yyyy" form, matching how the
/// portal indexes its per-day punch lists.
pub fn week_date_keys(date: NaiveDate) -> Vec<String> {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (0..7).map(|offset| (monday + Duration::days(offset)).format(DATE_KEY_FORMAT).to_string()).collect()
}

/// Parses a portal "dd-MM-yyyy" date key.
pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT).ok()
}

/// Formats a date as its portal date key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Whether the key names a day strictly before `today`. False when the key
/// does not parse.
pub fn is_past(raw: &str, today: NaiveDate) -> bool {
    match parse_date_key(raw) {
        Some(date) => date < today,
        None => false,
    }
}

/// Whether the key names `today` itself. False when the key does not parse.
pub fn is_today(raw: &str, today: NaiveDate) -> bool {
    parse_date_key(raw) == Some(today)
}

/// Whether the key falls on a Saturday or Sunday. False when the key does
/// not parse.
pub fn is_weekend(raw: &str) -> bool {
    match parse_date_key(raw) {
        Some(date) => matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        None => false,
    }
}

/// French day title like "Mardi 17 février", first letter capitalized.
///
/// Falls back to the raw key when it does not parse, so a malformed key
/// still gets a visible row instead of breaking the table.
pub fn long_title(raw: &str) -> String {
    match parse_date_key(raw) {
        Some(date) => capitalize_first(&date.format_localized("%A %-d %B", Locale::fr_FR).to_string()),
        None => raw.to_string(),
    }
}

/// Abbreviated French weekday like "Lun." or "Mar.", "-" when unparseable.
pub fn short_weekday(raw: &str) -> String {
    match parse_date_key(raw) {
        Some(date) => {
            let label = date.format_localized("%a", Locale::fr_FR).to_string();
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => "-".to_string(),
            }
        }
        None => "-".to_string(),
    }
}

/// Single-letter French weekday used by the compact progress row.
pub fn narrow_weekday(raw: &str) -> String {
    match parse_date_key(raw) {
        Some(date) => match date.weekday() {
            Weekday::Mon => "L",
            Weekday::Tue | Weekday::Wed => "M",
            Weekday::Thu => "J",
            Weekday::Fri => "V",
            Weekday::Sat => "S",
            Weekday::Sun => "D",
        }
        .to_string(),
        None => "-".to_string(),
    }
}

fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
