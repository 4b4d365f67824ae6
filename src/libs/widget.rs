//! Widget snapshot projection and publishing.
//!
//! External bar and widget renderers do not recompute anything: they read
//! one flat JSON snapshot from the shared data directory and draw it. This
//! module projects a [`WeekContext`] into that snapshot and owns the files
//! under `shared/`:
//!
//! - `snapshot.json` holds the current [`WidgetSnapshot`]
//! - `weekly.refresh` and `today.refresh` are per-widget markers whose
//!   counter bumps whenever that widget should redraw
//!
//! Publishing is change-gated. The projected snapshot is compared against
//! the one already on disk and an equal snapshot writes nothing and bumps
//! nothing, so refresh loops do not wake the renderer every tick.

use crate::libs::data_storage::DataStorage;
use crate::libs::summary::WeekContext;
use crate::libs::theme::Theme;
use crate::libs::timemath;
use crate::msg_debug;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

const SNAPSHOT_FILE: &str = "snapshot.json";
const REFRESH_SUFFIX: &str = ".refresh";

/// The two widget kinds the renderer registers.
pub const WIDGET_KINDS: [&str; 2] = ["weekly", "today"];

/// One presence interval as the renderer draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTimeRange {
    pub start: String,
    pub end: String,
}

/// Flat, render-ready projection of the week for external widgets.
///
/// Week fields are always present. Today and theme fields are optional on
/// the wire so older snapshots keep loading after upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub total_effective: String,
    pub total_paid: String,
    pub remaining: String,
    pub progress: i64,
    pub is_offline: bool,
    pub last_sync: String,
    pub theme: Option<String>,
    pub accent_hex: Option<String>,
    pub accent_secondary_hex: Option<String>,
    pub background_start_hex: Option<String>,
    pub background_end_hex: Option<String>,
    pub is_light_theme: Option<bool>,
    pub today_worked: Option<String>,
    pub today_target: Option<String>,
    pub today_remaining: Option<String>,
    pub today_sessions: Option<i64>,
    pub today_first_in: Option<String>,
    pub today_last_out: Option<String>,
    pub today_ranges: Option<Vec<WidgetTimeRange>>,
    pub today_is_absent: Option<bool>,
    pub today_is_working: Option<bool>,
}

impl WidgetSnapshot {
    /// Projects a week context into the renderer's flat shape.
    ///
    /// `last_sync` is the stamp of the data fetch, not of this call, so a
    /// recomputation after a local mutation yields a snapshot equal to the
    /// previous one unless a figure actually moved.
    pub fn project(context: &WeekContext, theme: Theme, offline: bool, last_sync: &str) -> Self {
        let today = context.today();
        let mut sorted_blocks = today.as_ref().map(|day| day.time_blocks.clone()).unwrap_or_default();
        sorted_blocks.sort_by_key(|block| timemath::parse_minutes(&block.start));

        let today_worked = today.as_ref().map(|day| day.total_minutes()).unwrap_or(0);
        let daily_target = context.daily_target_minutes();
        let today_remaining = (daily_target - today_worked).max(0);
        let today_ranges: Vec<WidgetTimeRange> = sorted_blocks
            .iter()
            .map(|block| WidgetTimeRange {
                start: block.start.clone(),
                end: block.end.clone(),
            })
            .collect();

        Self {
            total_effective: context.total_effective(),
            total_paid: context.total_paid(),
            remaining: timemath::format_minutes(context.remaining_minutes().max(0)),
            progress: context.progress_percentage(),
            is_offline: offline,
            last_sync: last_sync.to_string(),
            theme: Some(theme.as_str().to_string()),
            accent_hex: Some(theme.accent_hex().to_string()),
            accent_secondary_hex: Some(theme.accent_secondary_hex().to_string()),
            background_start_hex: Some(theme.background_start_hex().to_string()),
            background_end_hex: Some(theme.background_end_hex().to_string()),
            is_light_theme: Some(theme.is_light()),
            today_worked: Some(timemath::format_minutes(today_worked)),
            today_target: Some(timemath::format_minutes(daily_target)),
            today_remaining: Some(timemath::format_minutes(today_remaining)),
            today_sessions: Some(sorted_blocks.len() as i64),
            today_first_in: sorted_blocks.first().map(|block| block.start.clone()),
            today_last_out: sorted_blocks.last().map(|block| block.end.clone()),
            today_ranges: Some(today_ranges),
            today_is_absent: Some(today.as_ref().map(|day| day.is_fully_absent()).unwrap_or(false)),
            today_is_working: Some(context.today_is_working()),
        }
    }
}

/// File-backed store the renderer watches.
pub struct WidgetStore {
    storage: DataStorage,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self { storage: DataStorage::new() }
    }

    /// The snapshot currently on disk, `None` when missing or unreadable.
    pub fn load(&self) -> Option<WidgetSnapshot> {
        let path = self.storage.get_shared_path(SNAPSHOT_FILE).ok()?;
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Writes the snapshot and wakes both widgets, unless it equals the
    /// snapshot already on disk. Returns whether anything was published.
    pub fn publish(&self, snapshot: &WidgetSnapshot) -> Result<bool> {
        if self.load().as_ref() == Some(snapshot) {
            msg_debug!("Widget snapshot unchanged, publish skipped");
            return Ok(false);
        }

        let path = self.storage.get_shared_path(SNAPSHOT_FILE)?;
        fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
        self.signal_refresh_all()?;
        msg_debug!(format!("Widget snapshot published to {}", path.display()));
        Ok(true)
    }

    /// Removes the snapshot and wakes both widgets so they drop to their
    /// disconnected state.
    pub fn clear(&self) -> Result<()> {
        let path = self.storage.get_shared_path(SNAPSHOT_FILE)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        self.signal_refresh_all()?;
        msg_debug!("Widget snapshot cleared");
        Ok(())
    }

    /// Bumps the refresh counter for one widget kind.
    pub fn signal_refresh(&self, kind: &str) -> Result<()> {
        let path = self.storage.get_shared_path(&format!("{}{}", kind, REFRESH_SUFFIX))?;
        let counter: u64 = fs::read_to_string(&path).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(0);
        fs::write(&path, (counter + 1).to_string())?;
        Ok(())
    }

    fn signal_refresh_all(&self) -> Result<()> {
        for kind in WIDGET_KINDS {
            self.signal_refresh(kind)?;
        }
        Ok(())
    }
}

impl Default for WidgetStore {
    fn default() -> Self {
        Self::new()
    }
}
