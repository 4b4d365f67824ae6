//! Shared fetch, recompute and republish plumbing for the commands.
//!
//! Several commands end the same way: make sure the weeks cache is
//! current, rebuild the [`WeekContext`] from cache plus local absences,
//! and push a fresh widget snapshot. This module holds that sequence so
//! the command modules stay thin.

use crate::api::{Portal, PortalConfig, Session};
use crate::db::absences::Absences;
use crate::libs::store::{Profile, Store, WeeksCache};
use crate::libs::summary::WeekContext;
use crate::libs::widget::{WidgetSnapshot, WidgetStore};
use anyhow::Result;
use chrono::Local;

/// Full portal round-trip: authenticate, fetch, merge any server-pushed
/// preferences into the profile, and replace the weeks cache.
///
/// Messaging is left to the caller; a background refresh loop and an
/// interactive command want different noise levels for the same outcome.
pub async fn sync(portal_config: &PortalConfig, store: &Store) -> Result<WeeksCache> {
    let mut portal = Portal::new(portal_config);
    let data = portal.fetch().await?;

    if let Some(preferences) = &data.preferences {
        store.apply_server_preferences(preferences.theme.as_deref(), preferences.minutes_objective)?;
    }

    let stale = data.is_stale();
    store.save_weeks(data.weeks, stale, Local::now().naive_local())
}

/// Builds the dashboard context for a login from cached weeks, declared
/// absences and the profile objective, pinned to the current instant.
pub fn context(login: &str, cache: &WeeksCache, profile: &Profile) -> Result<WeekContext> {
    let absences = Absences::new()?.load_map(login)?;
    Ok(WeekContext::new(cache.weeks.clone(), absences, profile.minutes_objective, Local::now().naive_local()))
}

/// Projects the context and publishes the widget snapshot. Returns
/// whether anything was written (false when the snapshot was unchanged).
pub fn republish(context: &WeekContext, profile: &Profile, cache: &WeeksCache) -> Result<bool> {
    let snapshot = WidgetSnapshot::project(context, profile.theme_or_default(), cache.stale, &cache.fetched_at);
    WidgetStore::new().publish(&snapshot)
}
