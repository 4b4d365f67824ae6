//! Per-login local state: profile preferences and the cached week payload.
//!
//! Everything here is keyed by the portal login so several accounts can be
//! used on the same machine. The profile holds presentation preferences
//! (theme, weekly objective), the weeks cache holds the last normalized
//! portal payload together with its fetch stamp so absence edits and
//! preference changes can recompute the dashboard and republish the widget
//! without a network round-trip.

use super::data_storage::DataStorage;
use super::payload::WeekPayload;
use crate::libs::theme::Theme;
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::PathBuf;

/// Timestamp format used for the weeks cache fetch stamp.
pub const FETCH_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default weekly objective in minutes (38 hours).
pub const DEFAULT_OBJECTIVE_MINUTES: i64 = 2280;

/// Presentation preferences stored per login.
///
/// The theme is kept as its raw key so an unknown value written by a newer
/// version (or by hand) degrades at use time instead of failing the whole
/// profile decode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub theme: String,
    pub minutes_objective: i64,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            theme: Theme::Ocean.as_str().to_string(),
            minutes_objective: DEFAULT_OBJECTIVE_MINUTES,
        }
    }
}

impl Profile {
    /// Resolves the stored theme key, falling back to the default theme
    /// when the key is unknown.
    pub fn theme_or_default(&self) -> Theme {
        Theme::parse(&self.theme).unwrap_or(Theme::Ocean)
    }
}

/// Last normalized portal payload plus its provenance.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WeeksCache {
    pub weeks: HashMap<String, WeekPayload>,
    /// Local time of the fetch, formatted with [`FETCH_STAMP_FORMAT`].
    pub fetched_at: String,
    /// True when the portal answered from its own cache (offline data).
    pub stale: bool,
}

/// File-backed store for one login's profile and weeks cache.
pub struct Store {
    login: String,
    storage: DataStorage,
}

impl Store {
    pub fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            storage: DataStorage::new(),
        }
    }

    fn profile_path(&self) -> Result<PathBuf> {
        self.storage.get_path(&format!("profile_{}.json", self.login))
    }

    fn weeks_path(&self) -> Result<PathBuf> {
        self.storage.get_path(&format!("weeks_{}.json", self.login))
    }

    /// Loads the profile, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_profile(&self) -> Profile {
        let path = match self.profile_path() {
            Ok(path) => path,
            Err(_) => return Profile::default(),
        };
        fs::read_to_string(path).ok().and_then(|raw| serde_json::from_str(&raw).ok()).unwrap_or_default()
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        let file = File::create(self.profile_path()?)?;
        serde_json::to_writer_pretty(&file, profile)?;
        Ok(())
    }

    /// Loads the cached weeks payload. `None` when no sync has happened
    /// yet or the cache cannot be decoded.
    pub fn load_weeks(&self) -> Option<WeeksCache> {
        let path = self.weeks_path().ok()?;
        let raw = fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Replaces the weeks cache with a fresh fetch result.
    pub fn save_weeks(&self, weeks: HashMap<String, WeekPayload>, stale: bool, now: NaiveDateTime) -> Result<WeeksCache> {
        let cache = WeeksCache {
            weeks,
            fetched_at: now.format(FETCH_STAMP_FORMAT).to_string(),
            stale,
        };
        let file = File::create(self.weeks_path()?)?;
        serde_json::to_writer_pretty(&file, &cache)?;
        Ok(cache)
    }

    /// Drops the weeks cache, typically on logout.
    pub fn clear_weeks(&self) -> Result<()> {
        let path = self.weeks_path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Merges server-pushed preferences into the local profile.
    ///
    /// A server value wins only when it is usable: a theme key that
    /// resolves, an objective that is strictly positive. The merged
    /// profile is written back so the next run starts from it.
    pub fn apply_server_preferences(&self, theme: Option<&str>, minutes_objective: Option<i64>) -> Result<Profile> {
        let mut profile = self.load_profile();
        if let Some(key) = theme {
            if let Some(theme) = Theme::parse(key) {
                profile.theme = theme.as_str().to_string();
            }
        }
        if let Some(minutes) = minutes_objective {
            if minutes > 0 {
                profile.minutes_objective = minutes;
            }
        }
        self.save_profile(&profile)?;
        Ok(profile)
    }
}

/// Renders the French freshness label for a fetch stamp.
///
/// The stamp is compared against `now` at second granularity. An absent or
/// unparseable stamp reads as never synchronized.
pub fn last_sync_label(fetched_at: Option<&str>, now: NaiveDateTime) -> String {
    let Some(stamp) = fetched_at else {
        return "Jamais synchronisé".to_string();
    };
    let Ok(synced) = NaiveDateTime::parse_from_str(stamp, FETCH_STAMP_FORMAT) else {
        return "Jamais synchronisé".to_string();
    };

    let elapsed = (now - synced).num_seconds().max(0);
    if elapsed < 60 {
        return "Mis à jour à l'instant".to_string();
    }
    if elapsed < 3_600 {
        return format!("Mis à jour il y a {} min", elapsed / 60);
    }
    if elapsed < 86_400 {
        return format!("Mis à jour il y a {} h", elapsed / 3_600);
    }
    format!("Mis à jour {}", synced.format("%d/%m %H:%M"))
}
