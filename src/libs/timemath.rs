//! Minute-based time arithmetic for badge punch calculations.
//!
//! Every duration and timestamp in the weekly dashboard is ultimately a count
//! of minutes since midnight. This module owns the conversions between those
//! counts and the "HH:MM" strings the portal speaks, plus the two fixed
//! windows the calculations depend on.
//!
//! ## Windows
//!
//! - **Paid window** `[08:30, 18:30]`: the portal only credits badge time
//!   inside this range. Totals clamp both ends of every punch pair into it.
//! - **Day view window** `[08:00, 19:00]`: the span the timeline bar renders.
//!   [`timeline_offset`] maps a time of day onto `[0.0, 1.0]` within it.
//!
//! ## Parsing Rules
//!
//! [`parse_minutes`] is total: any input that is not exactly two integer
//! components separated by colons yields `0`. The portal occasionally sends
//! placeholder strings ("--:--", empty cells) and the dashboard must keep
//! rendering, so malformed input degrades to zero instead of erroring.
//!
//! ## Formatting Rules
//!
//! - [`format_minutes`]: zero-padded "HH:MM", negatives clamped to "00:00"
//! - [`format_signed_minutes`]: same, but negatives keep a leading "-"
//! - [`hour_label`]: compact "7h36" style used by summary lines and widgets
//!
//! ## Examples
//!
//! ```rust
//! use pointage::libs::timemath;
//!
//! assert_eq!(timemath::parse_minutes("08:30"), 510);
//! assert_eq!(timemath::format_minutes(456), "07:36");
//! assert_eq!(timemath::hour_label(456), "7h36");
//! assert_eq!(timemath::duration_minutes(510, 720), 210);
//! ```

/// Start of the rendered day view: 08:00 as minutes since midnight.
pub const DAY_VIEW_START_MINUTES: i64 = 480;

/// End of the rendered day view: 19:00 as minutes since midnight.
pub const DAY_VIEW_END_MINUTES: i64 = 1140;

/// Earliest minute of day the portal credits: 08:30.
pub const PAID_WINDOW_START_MINUTES: i64 = 510;

/// Latest minute of day the portal credits: 18:30.
pub const PAID_WINDOW_END_MINUTES: i64 = 1110;

/// Converts an "HH:MM" string into minutes since midnight.
///
/// The parse is strict about shape and lenient about failure: the input must
/// contain exactly two integer components once non-numeric fragments are
/// discarded, otherwise the result is `0`. Negative hour components are kept
/// as-is so signed durations round-trip through [`format_signed_minutes`].
///
/// # Arguments
///
/// * `value` - A candidate "HH:MM" string from the portal or a cache file
///
/// # Returns
///
/// Minutes since midnight, or `0` when the input does not parse.
///
/// # Examples
///
/// ```rust
/// use pointage::libs::timemath::parse_minutes;
///
/// assert_eq!(parse_minutes("08:30"), 510);
/// assert_eq!(parse_minutes("00:00"), 0);
/// assert_eq!(parse_minutes("19:05"), 1145);
///
/// // Anything that is not two integer parts collapses to zero
/// assert_eq!(parse_minutes(""), 0);
/// assert_eq!(parse_minutes("--:--"), 0);
/// assert_eq!(parse_minutes("08:30:00"), 0);
/// assert_eq!(parse_minutes("soon"), 0);
/// ```
pub fn parse_minutes(value: &str) -> i64 {
    let parts: Vec<i64> = value.split(':').filter_map(|part| part.parse::<i64>().ok()).collect();
    if parts.len() != 2 {
        return 0;
    }
    parts[0] * 60 + parts[1]
}

/// Formats minutes since midnight (or a duration) as zero-padded "HH:MM".
///
/// Negative inputs render as "00:00". Durations past 24 hours keep growing
/// the hour field ("25:30") instead of wrapping, which is what weekly totals
/// need.
///
/// # Examples
///
/// ```rust
/// use pointage::libs::timemath::format_minutes;
///
/// assert_eq!(format_minutes(510), "08:30");
/// assert_eq!(format_minutes(0), "00:00");
/// assert_eq!(format_minutes(-42), "00:00");
/// assert_eq!(format_minutes(1530), "25:30");
/// ```
pub fn format_minutes(total: i64) -> String {
    let clamped = total.max(0);
    format!("{:02}:{:02}", clamped / 60, clamped % 60)
}

/// Formats a possibly negative minute count, keeping the sign.
///
/// Used for the weekly balance where overshooting the objective produces a
/// negative remainder that should read "-01:15" rather than "00:00".
pub fn format_signed_minutes(total: i64) -> String {
    if total < 0 {
        format!("-{}", format_minutes(-total))
    } else {
        format_minutes(total)
    }
}

/// Formats minutes as a compact hour label like "7h36".
///
/// Hours are not zero-padded, minutes are. Negative inputs clamp to "0h00".
/// This is the style used in summary lines and the widget snapshot.
pub fn hour_label(total: i64) -> String {
    let clamped = total.max(0);
    format!("{}h{:02}", clamped / 60, clamped % 60)
}

/// Duration in minutes between two times of day, floored at zero.
///
/// An end before its start yields `0` rather than a negative duration;
/// inverted pairs come from clock corrections on the portal side and must
/// not subtract from totals.
pub fn duration_minutes(start: i64, end: i64) -> i64 {
    (end - start).max(0)
}

/// Clamps a time of day into the paid window `[08:30, 18:30]`.
pub fn clamp_to_paid_window(minutes: i64) -> i64 {
    minutes.clamp(PAID_WINDOW_START_MINUTES, PAID_WINDOW_END_MINUTES)
}

/// Maps a time of day onto the `[0.0, 1.0]` span of the day view window.
///
/// Times before 08:00 pin to `0.0` and times after 19:00 pin to `1.0`, so
/// the timeline bar never renders outside its track.
///
/// # Examples
///
/// ```rust
/// use pointage::libs::timemath::timeline_offset;
///
/// assert_eq!(timeline_offset(480), 0.0);
/// assert_eq!(timeline_offset(1140), 1.0);
/// assert_eq!(timeline_offset(810), 0.5);
/// assert_eq!(timeline_offset(0), 0.0);
/// assert_eq!(timeline_offset(1439), 1.0);
/// ```
pub fn timeline_offset(minutes: i64) -> f64 {
    let span = (DAY_VIEW_END_MINUTES - DAY_VIEW_START_MINUTES) as f64;
    (((minutes - DAY_VIEW_START_MINUTES) as f64) / span).clamp(0.0, 1.0)
}
