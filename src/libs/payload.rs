//! Portal response data model and its tolerant decoding.
//!
//! The badge portal's JSON is inconsistent across deployments. The current
//! shape keys full week payloads by ISO week; an older deployment returns a
//! single flat `hours` map with week totals at the top level; `preferences`
//! arrives as `{}`, `[]` or garbage depending on the backend revision.
//!
//! Decoding therefore happens in two steps:
//!
//! 1. [`RawResponse`] captures the wire shape with every contested field as
//!    loose JSON, so one malformed section never sinks the whole response.
//! 2. [`RawResponse::normalize`] turns it into a [`PortalData`] value. The
//!    legacy flat shape is folded into a single synthetic week keyed by the
//!    caller's current date, which keeps the step deterministic in tests.

use crate::libs::week;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server-side user preferences, when the deployment supports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserPreferences {
    pub theme: Option<String>,
    pub minutes_objective: Option<i64>,
}

/// One day of badge punches plus the portal's own per-day totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPayload {
    #[serde(default)]
    pub hours: Vec<String>,
    pub effective: Option<String>,
    pub paid: Option<String>,
}

impl DayPayload {
    pub fn empty() -> Self {
        Self {
            hours: Vec::new(),
            effective: None,
            paid: None,
        }
    }
}

/// One week of days with the portal's effective and paid totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPayload {
    pub days: HashMap<String, DayPayload>,
    pub total_effective: String,
    pub total_paid: String,
}

/// The normalized portal response every other layer works with.
#[derive(Debug, Clone, Default)]
pub struct PortalData {
    pub preferences: Option<UserPreferences>,
    pub token: Option<String>,
    pub weeks: HashMap<String, WeekPayload>,
    pub error: Option<String>,
}

impl PortalData {
    /// True when the portal answered from its own cache instead of the
    /// badge system. The response is still usable, just not fresh.
    pub fn is_stale(&self) -> bool {
        match &self.error {
            Some(message) => message.to_lowercase().contains("cached data"),
            None => false,
        }
    }
}

/// Wire-shape response. Contested fields stay loose JSON until
/// [`normalize`](Self::normalize) sorts them out.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    preferences: Option<serde_json::Value>,
    #[serde(default)]
    token: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    weeks: Option<serde_json::Value>,
    #[serde(default)]
    hours: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    total_effective: Option<String>,
    #[serde(default)]
    total_paid: Option<String>,
}

impl RawResponse {
    /// Normalizes the wire shape into [`PortalData`].
    ///
    /// Fields that fail to take their expected type degrade to `None`. The
    /// `weeks` map wins when it decodes; otherwise a present legacy `hours`
    /// map becomes one week keyed by `today`'s ISO week, with
    /// `total_effective` defaulting to "00:00" and `total_paid` defaulting
    /// to the effective total. Neither shape present means no weeks at all.
    pub fn normalize(self, today: NaiveDate) -> PortalData {
        let preferences = self.preferences.and_then(|value| serde_json::from_value::<UserPreferences>(value).ok());
        let token = self.token.and_then(|value| serde_json::from_value::<String>(value).ok());
        let error = self.error.and_then(|value| serde_json::from_value::<String>(value).ok());

        let weeks = match self.weeks.and_then(|value| serde_json::from_value::<HashMap<String, WeekPayload>>(value).ok()) {
            Some(weeks) => weeks,
            None => match self.hours {
                Some(legacy_hours) => {
                    let days: HashMap<String, DayPayload> = legacy_hours
                        .into_iter()
                        .map(|(date_key, hours)| {
                            (
                                date_key,
                                DayPayload {
                                    hours,
                                    effective: None,
                                    paid: None,
                                },
                            )
                        })
                        .collect();
                    let total_effective = self.total_effective.unwrap_or_else(|| "00:00".to_string());
                    let total_paid = self.total_paid.unwrap_or_else(|| total_effective.clone());
                    HashMap::from([(
                        week::current_week_key(today),
                        WeekPayload {
                            days,
                            total_effective,
                            total_paid,
                        },
                    )])
                }
                None => HashMap::new(),
            },
        };

        PortalData {
            preferences,
            token,
            weeks,
            error,
        }
    }
}

/// Error body some portal endpoints attach to non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<String>,
    pub token_invalidated: Option<bool>,
}
