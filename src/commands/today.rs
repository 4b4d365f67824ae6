//! Today detail command.
//!
//! A fast, local-only view: punch table, pause and amplitude figures and
//! the day timeline, all computed from the cached weeks. Use `week
//! --sync` or `login` to refresh the cache first.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::{last_sync_label, Store};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let portal_config = config.portal()?;
    let store = Store::new(&portal_config.login);

    let Some(cache) = store.load_weeks() else {
        msg_bail_anyhow!(Message::NoCachedData);
    };

    let profile = store.load_profile();
    let context = refresh::context(&portal_config.login, &cache, &profile)?;

    let Some(day) = context.today() else {
        msg_info!(Message::NoWeekData);
        return Ok(());
    };

    if cache.stale {
        msg_warning!(Message::StaleData);
    }
    msg_print!(Message::TodayHeader(day.title.clone()), true);
    View::today(&context)?;
    msg_print!(Message::UsingCachedData(last_sync_label(Some(&cache.fetched_at), Local::now().naive_local())));
    Ok(())
}
