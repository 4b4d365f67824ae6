//! Display implementation for application messages.
//!
//! Every user-facing line of text lives here, behind the `Message` enum.
//! Keeping the text in one place makes wording changes cheap, keeps the
//! command modules free of string literals, and lets parameters stay typed
//! until the moment they are rendered.
//!
//! ## Text Conventions
//!
//! - Sentence case, active voice, no trailing period on single-line status
//!   text
//! - Severity prefixes (✅, ❌, ⚠️) are added by the macros, never here
//! - Dates and times arrive pre-formatted from the caller; this layer does
//!   not parse or reformat them
//! - Interface text is English; day names, absence labels and the weekly
//!   verdict are portal-facing French strings owned by the data layer, not
//!   by this enum

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found. Run 'pointage init' first".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigPortalMissing => "Badge portal is not configured. Run 'pointage init'".to_string(),
            Message::PromptPortalUrl => "Enter the badge portal URL".to_string(),
            Message::PromptPortalLogin => "Enter your badge portal login".to_string(),
            Message::PromptSelectTheme => "Select the widget theme".to_string(),
            Message::PromptObjectiveHours => "Weekly objective in hours (1-60)".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::LoginSuccess(login) => format!("Logged in as {}", login),
            Message::LoggedOut => "Logged out and cleared local session data".to_string(),
            Message::TokenMissing(login) => format!("No saved session for {}. Run 'pointage login'", login),
            Message::SessionInvalidated => "The portal invalidated this session. Log in again".to_string(),
            Message::SessionExpired => "Session expired. Log in again".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncedAt(stamp) => format!("Synced with the portal at {}", stamp),
            Message::SyncFailed(reason) => format!("Portal sync failed: {}", reason),
            Message::StaleData => "The portal served cached data; figures may be behind".to_string(),
            Message::NoCachedData => "No cached week data. Run 'pointage login' or 'pointage week --sync'".to_string(),
            Message::UsingCachedData(label) => format!("Using cached data ({})", label),

            // === DASHBOARD MESSAGES ===
            Message::WeekHeader(week_key) => format!("📊 Week {}", week_key),
            Message::TodayHeader(title) => format!("📅 {}", title),
            Message::NoWeekData => "The portal sent no week data yet".to_string(),

            // === ABSENCE MESSAGES ===
            Message::AbsenceSet(date, label) => format!("Absence recorded for {}: {}", date, label),
            Message::AbsenceCleared(date) => format!("Absence cleared for {}", date),
            Message::InvalidAbsenceSection(raw) => {
                format!("Unknown absence section '{}'. Use day, morning, afternoon or none", raw)
            }
            Message::InvalidDateFormat(raw) => format!("Invalid date '{}'. Use 'today' or DD-MM-YYYY", raw),

            // === PREFERENCE MESSAGES ===
            Message::ThemeUpdated(theme) => format!("Widget theme set to {}", theme),
            Message::ObjectiveUpdated(minutes) => format!("Weekly objective set to {} minutes", minutes),
            Message::UnknownTheme(raw) => format!(
                "Unknown theme '{}'. Available: midnight, light, abyss, ocean, forest, sunset, lavender, christmas",
                raw
            ),
            Message::PrefsPushed => "Preferences synced with the portal".to_string(),
            Message::PrefsPushFailed(reason) => format!("Portal preference sync failed ({}); local values kept", reason),
            Message::NothingToUpdate => "Nothing to update. Pass --theme and/or --objective-hours".to_string(),

            // === WIDGET MESSAGES ===
            Message::WidgetPublished => "Widget snapshot published".to_string(),
            Message::WidgetUnchanged => "Widget snapshot unchanged".to_string(),
            Message::WidgetCleared => "Widget snapshot cleared".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => format!("Refreshing every {} seconds. Press Ctrl+C to stop", interval),
            Message::WatchStopped => "Watch stopped".to_string(),
            Message::WatchRefreshFailed(reason) => format!("Refresh failed: {}", reason),
        };
        write!(f, "{}", message)
    }
}
