//! Terminal rendering for the week dashboard and the day detail.
//!
//! Tables carry the raw figures; the surrounding lines reuse the French
//! labels the badge data itself is written in. All layout maths stay here
//! so the aggregation engine never knows about columns or bar widths.

use super::blocks::TimeBlock;
use super::day::DayPresentation;
use super::summary::{ExpandedDays, WeekContext};
use super::timemath;
use super::week;
use anyhow::Result;
use chrono::Timelike;
use prettytable::{row, Table};

/// Width of the progress bars, in characters.
const BAR_WIDTH: usize = 24;

/// Width of the day timeline, in characters. A multiple of the tick
/// spacing so the hour marks land on whole cells.
const TIMELINE_WIDTH: usize = 44;

pub struct View {}

impl View {
    /// Prints the weekly dashboard: day table, week summary, statistics
    /// and per-day progress bars.
    pub fn week(context: &WeekContext, expanded: &ExpandedDays, last_sync: &str) -> Result<()> {
        let days = context.day_presentations();
        let today = context.now().date();

        let mut table = Table::new();
        table.add_row(row!["JOUR", "PRÉSENCE", "POINTAGES", "PAUSE", "TOTAL"]);
        for day in &days {
            let is_today = week::is_today(&day.date_key, today);
            let title = if is_today { format!("▸ {}", day.title) } else { format!("  {}", day.title) };
            table.add_row(row![
                title,
                Self::presence_cell(day, is_today),
                Self::blocks_cell(day, is_today),
                Self::pause_cell(day),
                Self::total_cell(day),
            ]);

            if expanded.is_expanded(&day.date_key) {
                for (index, block) in Self::sorted_blocks(day).iter().enumerate() {
                    table.add_row(row![
                        "",
                        "",
                        format!("{}. {} → {}", index + 1, block.start, block.end),
                        "",
                        timemath::hour_label(block.duration_minutes),
                    ]);
                }
            }
        }
        table.printstd();

        println!();
        println!(
            "Semaine en cours  {:>3}%  {}",
            context.progress_percentage(),
            Self::bar(context.objective_completion(), BAR_WIDTH)
        );
        println!(
            "Effectif {} • Payé {} • Restant {}",
            context.total_effective(),
            context.total_paid(),
            timemath::format_minutes(context.remaining_minutes().max(0))
        );
        println!(
            "Objectif {} (ajusté {}) • {}",
            timemath::hour_label(context.objective_minutes()),
            timemath::hour_label(context.adjusted_objective_minutes()),
            last_sync
        );
        println!("{}", context.week_status_line());

        let session_count: usize = days.iter().map(|day| day.time_blocks.len()).sum();
        let delta = context.objective_delta_minutes();
        let progress_note = if delta >= 0 {
            format!("avance de +{}", timemath::format_minutes(delta))
        } else {
            format!("retard de {}", timemath::format_minutes(context.remaining_minutes()))
        };

        println!();
        println!("Résumé");
        let mut summary = Table::new();
        summary.add_row(row![
            "Moyenne quotidienne",
            timemath::hour_label(context.daily_average_minutes()),
            "jours passés"
        ]);
        summary.add_row(row!["Progression", format!("{}%", context.progress_percentage()), progress_note]);
        summary.add_row(row![
            "Session moyenne",
            timemath::hour_label(context.average_session_minutes()),
            format!("{} sessions", session_count)
        ]);
        summary.add_row(row!["Temps de pause", timemath::hour_label(context.week_pause_minutes()), "sur la semaine"]);
        summary.add_row(row![
            "Meilleur jour",
            context.best_day_short_name(),
            context
                .best_day()
                .map(|day| timemath::format_minutes(day.total_minutes()))
                .unwrap_or_else(|| "-".to_string())
        ]);
        summary.printstd();

        println!();
        println!("Jours ({} actifs)", context.worked_days());
        for snapshot in context.weekday_progress_snapshots() {
            let mut note = String::new();
            if snapshot.is_absent {
                note.push_str("  absent");
            }
            if snapshot.is_today {
                note.push_str("  • aujourd'hui");
            }
            println!(
                "  {}  {}  {}{}",
                snapshot.label,
                Self::bar(snapshot.progress, BAR_WIDTH),
                timemath::format_minutes(snapshot.minutes),
                note
            );
        }

        Ok(())
    }

    /// Prints the day detail: status, session table, day metrics and the
    /// badge timeline.
    pub fn today(context: &WeekContext) -> Result<()> {
        let Some(day) = context.today() else {
            return Ok(());
        };

        println!(
            "Pointé {} • {}",
            timemath::format_minutes(day.total_minutes()),
            Self::today_status(&day, context.today_is_working())
        );

        let sorted = Self::sorted_blocks(&day);
        if !sorted.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["#", "DÉBUT", "FIN", "DURÉE"]);
            for (index, block) in sorted.iter().enumerate() {
                table.add_row(row![index + 1, block.start, block.end, timemath::hour_label(block.duration_minutes)]);
            }
            table.printstd();

            println!(
                "Sessions {} • Amplitude {} • Pauses {}",
                sorted.len(),
                timemath::hour_label(WeekContext::amplitude_minutes(&day)),
                timemath::hour_label(WeekContext::pause_minutes(&day))
            );

            println!();
            println!("  {}", Self::timeline_cells(&sorted, context));
            println!("  {}", Self::timeline_ticks());
        }

        let target = context.daily_target_minutes();
        let worked = day.total_minutes();
        println!();
        println!(
            "Objectif du jour {} • Reste {}",
            timemath::hour_label(target),
            timemath::format_minutes((target - worked).max(0))
        );

        Ok(())
    }

    fn presence_cell(day: &DayPresentation, is_today: bool) -> String {
        if day.is_fully_absent() {
            return "Absent".to_string();
        }
        if day.is_partially_absent() {
            return format!("Absence {}", day.absence.label().to_lowercase());
        }
        if !day.is_past && !is_today {
            return "À venir".to_string();
        }
        if day.is_past && day.time_blocks.is_empty() {
            return "Manquant".to_string();
        }
        "Présent".to_string()
    }

    fn blocks_cell(day: &DayPresentation, is_today: bool) -> String {
        let sorted = Self::sorted_blocks(day);
        match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => {
                let count = sorted.len();
                format!("{} - {} ({} session{})", first.start, last.end, count, if count > 1 { "s" } else { "" })
            }
            _ if day.is_fully_absent() => String::new(),
            _ if is_today => "Journée en cours".to_string(),
            _ if day.is_past => "Aucun pointage".to_string(),
            _ => String::new(),
        }
    }

    fn pause_cell(day: &DayPresentation) -> String {
        let pause = WeekContext::pause_minutes(day);
        if pause > 0 {
            timemath::hour_label(pause)
        } else {
            String::new()
        }
    }

    fn total_cell(day: &DayPresentation) -> String {
        let total = day.total_minutes();
        if total > 0 {
            timemath::format_minutes(total)
        } else {
            "-".to_string()
        }
    }

    fn today_status(day: &DayPresentation, is_working: bool) -> &'static str {
        if day.is_fully_absent() {
            return "Absent";
        }
        if day.time_blocks.is_empty() {
            return "Pas commencé";
        }
        if is_working {
            return "En cours";
        }
        "Terminé"
    }

    fn sorted_blocks(day: &DayPresentation) -> Vec<TimeBlock> {
        let mut sorted = day.time_blocks.clone();
        sorted.sort_by_key(|block| timemath::parse_minutes(&block.start));
        sorted
    }

    /// Fixed-width bar filled proportionally to `ratio`, clamped to full.
    fn bar(ratio: f64, width: usize) -> String {
        let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        let mut bar = String::with_capacity(width);
        for index in 0..width {
            bar.push(if index < filled { '█' } else { '░' });
        }
        bar
    }

    /// One row of cells spanning the display window, blocks filled solid
    /// and the current instant marked when it falls inside the window.
    fn timeline_cells(blocks: &[TimeBlock], context: &WeekContext) -> String {
        let mut cells = vec!['░'; TIMELINE_WIDTH];

        for block in blocks {
            let start = timemath::timeline_offset(timemath::parse_minutes(&block.start));
            let end = timemath::timeline_offset(timemath::parse_minutes(&block.end));
            let from = ((start * TIMELINE_WIDTH as f64).floor() as usize).min(TIMELINE_WIDTH - 1);
            let to = ((end * TIMELINE_WIDTH as f64).ceil() as usize).clamp(from + 1, TIMELINE_WIDTH);
            for cell in cells.iter_mut().take(to).skip(from) {
                *cell = '█';
            }
        }

        let now = context.now().time();
        let now_minutes = now.hour() as i64 * 60 + now.minute() as i64;
        let progress = timemath::timeline_offset(now_minutes);
        if progress > 0.0 && progress < 1.0 {
            let at = ((progress * TIMELINE_WIDTH as f64) as usize).min(TIMELINE_WIDTH - 1);
            cells[at] = '|';
        }

        cells.into_iter().collect()
    }

    /// Hour marks under the timeline, every two hours across the window.
    fn timeline_ticks() -> String {
        let mut cells = vec![' '; TIMELINE_WIDTH];
        for hour in (8..=18).step_by(2) {
            let at = (timemath::timeline_offset(hour * 60) * TIMELINE_WIDTH as f64) as usize;
            for (offset, ch) in format!("{:02}", hour).chars().enumerate() {
                if at + offset < TIMELINE_WIDTH {
                    cells[at + offset] = ch;
                }
            }
        }
        cells.into_iter().collect::<String>().trim_end().to_string()
    }
}
