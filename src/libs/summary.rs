//! Weekly aggregation engine for badge punch data.
//!
//! [`WeekContext`] is an immutable snapshot of everything a dashboard needs:
//! the normalized portal weeks, the local absence map, the weekly objective
//! and the instant "now" was observed. Every metric is a method that
//! recomputes from those four inputs, so two contexts built from the same
//! inputs always agree and tests can pin any instant they like.
//!
//! ## Week selection
//!
//! The context works on one week at a time: the week keyed by the current
//! ISO week key when the portal sent it, otherwise the lexicographically
//! greatest key it did send (week numbers are zero-padded, so string order
//! is chronological order within a year), otherwise an empty week.
//!
//! ## Objective adjustment
//!
//! Declared absences convert to day equivalents (full day 1.0, half day
//! 0.5) and credit `objective * equivalents / 5` minutes against the weekly
//! objective, floored at zero. Paid time is then measured against the
//! adjusted objective everywhere: remaining balance, progress percentage
//! and daily pace all use it.
//!
//! ## Totals
//!
//! The paid and effective week totals are the portal's own strings, not
//! recomputed sums. The portal applies crediting rules this client cannot
//! reproduce from punches alone, so its totals are authoritative and the
//! per-day block sums remain display-level detail.

use crate::libs::blocks;
use crate::libs::day::{AbsenceMap, AbsenceSection, DayPresentation, DayProgressSnapshot};
use crate::libs::payload::{DayPayload, WeekPayload};
use crate::libs::timemath;
use crate::libs::week;
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};

/// Immutable weekly snapshot all dashboard metrics derive from.
#[derive(Debug, Clone)]
pub struct WeekContext {
    weeks: HashMap<String, WeekPayload>,
    absences: AbsenceMap,
    objective_minutes: i64,
    now: NaiveDateTime,
}

impl WeekContext {
    pub fn new(weeks: HashMap<String, WeekPayload>, absences: AbsenceMap, objective_minutes: i64, now: NaiveDateTime) -> Self {
        Self {
            weeks,
            absences,
            objective_minutes,
            now,
        }
    }

    pub fn objective_minutes(&self) -> i64 {
        self.objective_minutes
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// The key of the week under display. Falls back to the current ISO
    /// week key when the portal sent nothing at all.
    pub fn week_key(&self) -> String {
        let current_key = week::current_week_key(self.now.date());
        if self.weeks.contains_key(&current_key) {
            return current_key;
        }
        self.weeks.keys().max().cloned().unwrap_or(current_key)
    }

    /// The week under display: current ISO week if present, else the
    /// greatest key the portal sent.
    fn current_week(&self) -> Option<&WeekPayload> {
        let current_key = week::current_week_key(self.now.date());
        if let Some(payload) = self.weeks.get(&current_key) {
            return Some(payload);
        }
        let latest = self.weeks.keys().max()?;
        self.weeks.get(latest)
    }

    /// Portal effective total for the week, "00:00" when no week resolved.
    pub fn total_effective(&self) -> String {
        self.current_week().map(|payload| payload.total_effective.clone()).unwrap_or_else(|| "00:00".to_string())
    }

    /// Portal paid total for the week, "00:00" when no week resolved.
    pub fn total_paid(&self) -> String {
        self.current_week().map(|payload| payload.total_paid.clone()).unwrap_or_else(|| "00:00".to_string())
    }

    pub fn total_effective_minutes(&self) -> i64 {
        timemath::parse_minutes(&self.total_effective())
    }

    pub fn total_paid_minutes(&self) -> i64 {
        timemath::parse_minutes(&self.total_paid())
    }

    /// Minutes credited against the objective by declared absences.
    pub fn absence_credit_minutes(&self) -> i64 {
        let equivalent_days: f64 = self.day_presentations().iter().map(|day| day.absence.day_equivalent()).sum();
        (self.objective_minutes as f64 * (equivalent_days / 5.0)).round() as i64
    }

    /// Weekly objective after absence credit, floored at zero.
    pub fn adjusted_objective_minutes(&self) -> i64 {
        (self.objective_minutes - self.absence_credit_minutes()).max(0)
    }

    /// Paid minutes still owed this week. Negative once the objective is
    /// exceeded.
    pub fn remaining_minutes(&self) -> i64 {
        self.adjusted_objective_minutes() - self.total_paid_minutes()
    }

    /// Paid progress against the adjusted objective, clamped to `[0, 100]`.
    pub fn progress_percentage(&self) -> i64 {
        let denominator = self.adjusted_objective_minutes().max(1);
        let ratio = self.total_paid_minutes() as f64 / denominator as f64;
        ((ratio * 100.0).round() as i64).clamp(0, 100)
    }

    /// Unclamped completion ratio, 0 when the adjusted objective is 0.
    pub fn objective_completion(&self) -> f64 {
        let adjusted = self.adjusted_objective_minutes();
        if adjusted <= 0 {
            return 0.0;
        }
        self.total_paid_minutes() as f64 / adjusted as f64
    }

    /// Paid minutes minus adjusted objective. Positive means exceeded.
    pub fn objective_delta_minutes(&self) -> i64 {
        self.total_paid_minutes() - self.adjusted_objective_minutes()
    }

    /// The seven dashboard rows, Monday through Sunday.
    ///
    /// Days the portal did not send render as empty days; absences come
    /// from the local map; titles and past flags from the date key alone.
    pub fn day_presentations(&self) -> Vec<DayPresentation> {
        let empty = HashMap::new();
        let payload_days = self.current_week().map(|payload| &payload.days).unwrap_or(&empty);
        let today = self.now.date();
        let empty_day = DayPayload::empty();

        week::week_date_keys(today)
            .into_iter()
            .map(|date_key| {
                let payload = payload_days.get(&date_key).unwrap_or(&empty_day);
                DayPresentation {
                    title: week::long_title(&date_key),
                    is_past: week::is_past(&date_key, today),
                    absence: self.absences.get(&date_key),
                    time_blocks: blocks::blocks(&payload.hours, self.now.time()),
                    date_key,
                }
            })
            .collect()
    }

    pub fn today(&self) -> Option<DayPresentation> {
        self.day_presentations().into_iter().find(|day| week::is_today(&day.date_key, self.now.date()))
    }

    pub fn today_worked_minutes(&self) -> i64 {
        self.today().map(|day| day.total_minutes()).unwrap_or(0)
    }

    /// Whether the badge holder is inside right now: today's punch list
    /// ends on an unmatched badge-in.
    pub fn today_is_working(&self) -> bool {
        let Some(today) = self.today() else { return false };
        let Some(payload) = self.current_week().and_then(|week| week.days.get(&today.date_key)) else {
            return false;
        };
        payload.hours.len() % 2 == 1
    }

    /// Days with at least one block and no full-day absence.
    pub fn worked_days(&self) -> usize {
        self.day_presentations().iter().filter(|day| !day.is_fully_absent() && !day.time_blocks.is_empty()).count()
    }

    /// Upcoming weekdays with nothing declared yet.
    pub fn pending_days_count(&self) -> usize {
        self.day_presentations()
            .iter()
            .filter(|day| !day.is_past && !week::is_weekend(&day.date_key) && day.absence == AbsenceSection::None)
            .count()
    }

    /// Mean presence of completed days, falling back to the portal's
    /// effective total when no day qualifies yet.
    ///
    /// A day qualifies when it is past, not fully absent and has blocks.
    /// Early in the week nothing qualifies; the portal total is the best
    /// available stand-in and keeps the figure from reading zero.
    pub fn daily_average_minutes(&self) -> i64 {
        let days = self.day_presentations();
        let past_days: Vec<&DayPresentation> = days.iter().filter(|day| day.is_past && !day.is_fully_absent() && !day.time_blocks.is_empty()).collect();

        if past_days.is_empty() {
            return self.total_effective_minutes();
        }

        let total: i64 = past_days.iter().map(|day| day.total_minutes()).sum();
        (total as f64 / past_days.len() as f64).round() as i64
    }

    /// The day with the most presence minutes, earliest day winning ties.
    pub fn best_day(&self) -> Option<DayPresentation> {
        let mut best: Option<DayPresentation> = None;
        for day in self.day_presentations() {
            if day.is_fully_absent() || day.time_blocks.is_empty() {
                continue;
            }
            match &best {
                Some(current) if day.total_minutes() <= current.total_minutes() => {}
                _ => best = Some(day),
            }
        }
        best
    }

    /// "Lun."-style label of the best day, "-" when there is none.
    pub fn best_day_short_name(&self) -> String {
        match self.best_day() {
            Some(day) => week::short_weekday(&day.date_key),
            None => "-".to_string(),
        }
    }

    /// Weekdays that count toward the daily pace, never less than 1.
    pub fn active_weekdays_count(&self) -> i64 {
        let count = self
            .day_presentations()
            .iter()
            .filter(|day| !week::is_weekend(&day.date_key) && day.absence != AbsenceSection::Day)
            .count() as i64;
        count.max(1)
    }

    /// Weekdays still ahead, full-day absences excluded.
    pub fn remaining_weekdays_count(&self) -> i64 {
        self.day_presentations()
            .iter()
            .filter(|day| !day.is_past && !week::is_weekend(&day.date_key) && day.absence != AbsenceSection::Day)
            .count() as i64
    }

    /// Pace needed to still reach the objective, `None` once reached or
    /// when no weekday remains to spread it over.
    pub fn needed_daily_minutes(&self) -> Option<i64> {
        let remaining = self.remaining_minutes();
        let days_left = self.remaining_weekdays_count();
        if remaining <= 0 || days_left <= 0 {
            return None;
        }
        Some((remaining as f64 / days_left as f64).ceil() as i64)
    }

    /// Mean block length over the whole week, 0 without any block.
    pub fn average_session_minutes(&self) -> i64 {
        let days = self.day_presentations();
        let all_blocks: Vec<i64> = days.iter().flat_map(|day| day.time_blocks.iter().map(|block| block.duration_minutes)).collect();
        if all_blocks.is_empty() {
            return 0;
        }
        let total: i64 = all_blocks.iter().sum();
        (total as f64 / all_blocks.len() as f64).round() as i64
    }

    /// Minutes off badge between a day's blocks.
    ///
    /// Blocks are re-sorted by start time first; the portal delivers
    /// punches out of order after manual corrections. Fewer than two
    /// blocks means no gap to measure.
    pub fn pause_minutes(day: &DayPresentation) -> i64 {
        if day.time_blocks.len() < 2 {
            return 0;
        }

        let mut sorted = day.time_blocks.clone();
        sorted.sort_by_key(|block| timemath::parse_minutes(&block.start));

        let mut total = 0;
        for pair in sorted.windows(2) {
            let previous_end = timemath::parse_minutes(&pair[0].end);
            let next_start = timemath::parse_minutes(&pair[1].start);
            total += (next_start - previous_end).max(0);
        }
        total
    }

    /// Span from first badge-in to last badge-out, 0 without blocks.
    pub fn amplitude_minutes(day: &DayPresentation) -> i64 {
        let start = day.time_blocks.iter().map(|block| timemath::parse_minutes(&block.start)).min();
        let end = day.time_blocks.iter().map(|block| timemath::parse_minutes(&block.end)).max();
        match (start, end) {
            (Some(start), Some(end)) => (end - start).max(0),
            _ => 0,
        }
    }

    pub fn week_pause_minutes(&self) -> i64 {
        self.day_presentations().iter().map(Self::pause_minutes).sum()
    }

    /// Daily objective share used when judging day-level progress, at
    /// least 1 minute so ratios stay finite.
    fn expected_daily_minutes(&self) -> i64 {
        ((self.adjusted_objective_minutes() as f64 / self.active_weekdays_count() as f64).round() as i64).max(1)
    }

    /// Daily objective share published to widgets, floored at zero.
    pub fn daily_target_minutes(&self) -> i64 {
        ((self.adjusted_objective_minutes() as f64 / self.active_weekdays_count() as f64).round() as i64).max(0)
    }

    /// Compact per-day progress against the expected daily share.
    pub fn weekday_progress_snapshots(&self) -> Vec<DayProgressSnapshot> {
        let expected_daily = self.expected_daily_minutes();
        let today = self.now.date();

        self.day_presentations()
            .into_iter()
            .map(|day| {
                let minutes = day.total_minutes();
                DayProgressSnapshot {
                    label: week::narrow_weekday(&day.date_key),
                    minutes,
                    progress: minutes as f64 / expected_daily as f64,
                    is_today: !day.is_past && week::is_today(&day.date_key, today),
                    is_weekend: week::is_weekend(&day.date_key),
                    is_absent: day.absence == AbsenceSection::Day,
                    date_key: day.date_key,
                }
            })
            .collect()
    }

    /// One-line week verdict shown under the totals.
    pub fn week_status_line(&self) -> String {
        let delta = self.objective_delta_minutes();
        if delta >= 0 {
            return format!("Objectif dépassé de {}", timemath::format_minutes(delta));
        }
        if let Some(needed) = self.needed_daily_minutes() {
            return format!("Il reste {} • {}/jour", timemath::format_minutes(self.remaining_minutes()), timemath::hour_label(needed));
        }
        format!("Il reste {}", timemath::format_minutes(self.remaining_minutes()))
    }
}

/// Which dashboard rows are expanded to show their block detail.
///
/// Session-scoped display state; nothing here persists.
#[derive(Debug, Clone, Default)]
pub struct ExpandedDays(HashSet<String>);

impl ExpandedDays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, date_key: &str) -> bool {
        self.0.contains(date_key)
    }

    pub fn toggle(&mut self, date_key: &str) {
        if !self.0.remove(date_key) {
            self.0.insert(date_key.to_string());
        }
    }

    pub fn expand(&mut self, date_key: &str) {
        self.0.insert(date_key.to_string());
    }

    pub fn expand_all<I: IntoIterator<Item = String>>(&mut self, date_keys: I) {
        self.0.extend(date_keys);
    }
}
