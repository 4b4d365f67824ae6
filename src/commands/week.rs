//! Weekly dashboard command.
//!
//! Renders the per-day table, summary block and per-day progress bars
//! from the cached weeks. `--sync` forces a portal round-trip first; a
//! missing cache triggers one automatically so the first run works.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::{last_sync_label, Store};
use crate::libs::summary::ExpandedDays;
use crate::libs::view::View;
use crate::libs::week;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the weekly dashboard.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Fetch fresh data from the portal before rendering
    #[arg(long, short)]
    sync: bool,

    /// Expand the punch list for a day ('today' or DD-MM-YYYY, repeatable)
    #[arg(long, short, value_name = "DATE")]
    expand: Vec<String>,

    /// Expand the punch list for every day
    #[arg(long, short)]
    full: bool,
}

pub async fn cmd(args: WeekArgs) -> Result<()> {
    let config = Config::read()?;
    let portal_config = config.portal()?;
    let store = Store::new(&portal_config.login);

    let (cache, synced) = match store.load_weeks() {
        Some(cache) if !args.sync => (cache, false),
        _ => (refresh::sync(&portal_config, &store).await?, true),
    };

    let profile = store.load_profile();
    let context = refresh::context(&portal_config.login, &cache, &profile)?;

    let mut expanded = ExpandedDays::new();
    if args.full {
        expanded.expand_all(context.day_presentations().iter().map(|day| day.date_key.clone()));
    }
    for raw in &args.expand {
        expanded.expand(&resolve_date_key(raw)?);
    }

    if cache.stale {
        msg_warning!(Message::StaleData);
    }
    msg_print!(Message::WeekHeader(context.week_key()), true);
    View::week(&context, &expanded, &last_sync_label(Some(&cache.fetched_at), Local::now().naive_local()))?;

    // Fresh figures reach the widget too, not just the terminal.
    if synced {
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
