//! Pairing of raw badge punches into presence blocks.
//!
//! The portal reports each day as a flat, chronological list of "HH:MM"
//! punch times: in, out, in, out. Consecutive pairs form presence blocks.
//! An odd trailing punch means the badge holder is still inside; that open
//! block ends at the caller-supplied current time so the dashboard shows a
//! live, growing interval.
//!
//! Two different sums are derived from the same list:
//!
//! - [`blocks`] keeps the raw punch strings for display. A 07:12 badge-in
//!   renders as 07:12 even though the portal will not pay for it.
//! - [`clamped_total_minutes`] re-pairs the list and clamps both ends of
//!   every pair into the paid window before summing. This is the number the
//!   payroll side produces, so the dashboard matches the payslip.

use crate::libs::timemath;
use chrono::NaiveTime;

/// One presence interval inside a day.
///
/// `start` and `end` keep the portal's raw "HH:MM" strings. The duration is
/// precomputed in minutes with inverted pairs floored at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}

/// Formats the supplied current time the way punches arrive off the wire.
fn now_label(now: NaiveTime) -> String {
    now.format("%H:%M").to_string()
}

/// Pairs raw punches into display blocks.
///
/// Punches are consumed two at a time in list order. When the list has an
/// odd length the final punch opens a block that ends at `now`, which keeps
/// the current session visible while the badge holder is still inside.
/// Malformed punch strings stay visible as-is; only their parsed duration
/// collapses to zero.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveTime;
/// use pointage::libs::blocks::blocks;
///
/// let hours = vec!["08:30".to_string(), "12:00".to_string(), "13:00".to_string()];
/// let noon_past = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
/// let day = blocks(&hours, noon_past);
/// assert_eq!(day.len(), 2);
/// assert_eq!(day[1].end, "14:30");
/// assert_eq!(day[1].duration_minutes, 90);
/// ```
pub fn blocks(hours: &[String], now: NaiveTime) -> Vec<TimeBlock> {
    let mut result = Vec::with_capacity(hours.len().div_ceil(2));
    let mut index = 0;
    while index < hours.len() {
        let start = hours[index].clone();
        let end = match hours.get(index + 1) {
            Some(punch) => punch.clone(),
            None => now_label(now),
        };
        let duration_minutes = timemath::duration_minutes(timemath::parse_minutes(&start), timemath::parse_minutes(&end));
        result.push(TimeBlock { start, end, duration_minutes });
        index += 2;
    }
    result
}

/// Sums a day's punches with every pair clamped into the paid window.
///
/// Re-pairs the raw list instead of summing the display blocks: a block
/// may show 07:12 to 19:40 while only 08:30 to 18:30 of it counts. An odd trailing punch is closed at `now` before clamping, same
/// as [`blocks`].
pub fn clamped_total_minutes(hours: &[String], now: NaiveTime) -> i64 {
    let mut total = 0;
    let mut index = 0;
    while index < hours.len() {
        let start_raw = timemath::parse_minutes(&hours[index]);
        let end_raw = match hours.get(index + 1) {
            Some(punch) => timemath::parse_minutes(punch),
            None => timemath::parse_minutes(&now_label(now)),
        };
        let start = timemath::clamp_to_paid_window(start_raw);
        let end = timemath::clamp_to_paid_window(end_raw);
        total += (end - start).max(0);
        index += 2;
    }
    total
}
