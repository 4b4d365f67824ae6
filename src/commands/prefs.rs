//! Preference management command.
//!
//! Updates the local profile first, then pushes the new values to the
//! portal account as a best effort. A failed push keeps the local
//! values; the portal catches up on the next successful sync.

use crate::api::Portal;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::Store;
use crate::libs::theme::Theme;
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the preferences command.
#[derive(Debug, Args)]
pub struct PrefsArgs {
    /// Widget theme (midnight, light, abyss, ocean, forest, sunset, lavender, christmas)
    #[arg(long, short)]
    theme: Option<String>,

    /// Weekly objective in hours, clamped to 1-60
    #[arg(long, short, value_name = "HOURS")]
    objective_hours: Option<i64>,
}

pub async fn cmd(args: PrefsArgs) -> Result<()> {
    if args.theme.is_none() && args.objective_hours.is_none() {
        msg_bail_anyhow!(Message::NothingToUpdate);
    }

    let config = Config::read()?;
    let portal_config = config.portal()?;
    let store = Store::new(&portal_config.login);
    let mut profile = store.load_profile();

    if let Some(raw) = &args.theme {
        let Some(theme) = Theme::parse(&raw.to_lowercase()) else {
            msg_bail_anyhow!(Message::UnknownTheme(raw.clone()));
        };
        profile.theme = theme.as_str().to_string();
        msg_success!(Message::ThemeUpdated(theme.label().to_string()));
    }
    if let Some(hours) = args.objective_hours {
        profile.minutes_objective = hours.clamp(1, 60) * 60;
        msg_success!(Message::ObjectiveUpdated(profile.minutes_objective));
    }
    store.save_profile(&profile)?;

    let portal = Portal::new(&portal_config);
    match portal.push_preferences(profile.theme_or_default(), profile.minutes_objective).await {
        Ok(data) => {
            msg_success!(Message::PrefsPushed);
            if let Some(preferences) = &data.preferences {
                profile = store.apply_server_preferences(preferences.theme.as_deref(), preferences.minutes_objective)?;
            }
            // The push answers with a full payload; cache it when usable.
            if !data.weeks.is_empty() {
                let stale = data.is_stale();
                store.save_weeks(data.weeks, stale, Local::now().naive_local())?;
            }
        }
        Err(error) => msg_warning!(Message::PrefsPushFailed(error.to_string())),
    }

    if let Some(cache) = store.load_weeks() {
        let context = refresh::context(&portal_config.login, &cache, &profile)?;
        refresh::republish(&context, &profile, &cache)?;
    }
    Ok(())
}
