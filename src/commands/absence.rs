//! Absence declaration command.
//!
//! Declared absences live only on this machine; the portal never sees
//! them. Recording one immediately recomputes the dashboard from the
//! cached weeks and republishes the widget, so the adjusted objective
//! shows up without a network round-trip.

use crate::db::absences::Absences;
use crate::libs::config::Config;
use crate::libs::day::AbsenceSection;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::Store;
use crate::libs::week;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the absence command.
#[derive(Debug, Args)]
pub struct AbsenceArgs {
    /// Day to modify ('today' or DD-MM-YYYY)
    date: String,

    /// Section to declare: day, morning, afternoon, or none to clear
    section: String,
}

pub fn cmd(args: AbsenceArgs) -> Result<()> {
    let config = Config::read()?;
    let portal_config = config.portal()?;

    let date_key = resolve_date_key(&args.date)?;
    let Some(section) = AbsenceSection::parse(&args.section.to_lowercase()) else {
        msg_bail_anyhow!(Message::InvalidAbsenceSection(args.section.clone()));
    };

    Absences::new()?.set(&portal_config.login, &date_key, section)?;

    if section == AbsenceSection::None {
        msg_success!(Message::AbsenceCleared(date_key.clone()));
    } else {
        msg_success!(Message::AbsenceSet(date_key.clone(), section.label().to_string()));
    }

    let store = Store::new(&portal_config.login);
    if let Some(cache) = store.load_weeks() {
        let profile = store.load_profile();
        let context = refresh::context(&portal_config.login, &cache, &profile)?;
        refresh::republish(&context, &profile, &cache)?;
    }
    Ok(())
}

/// Resolves a user-typed date argument to the portal date key.
fn resolve_date_key(raw: &str) -> Result<String> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(week::date_key(Local::now().date_naive()));
    }
    match week::parse_date_key(raw) {
        Some(date) => Ok(week::date_key(date)),
        None => Err(msg_error_anyhow!(Message::InvalidDateFormat(raw.to_string()))),
    }
}
