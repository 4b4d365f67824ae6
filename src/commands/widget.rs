//! Widget snapshot command.
//!
//! Republishes the snapshot from cached state, or clears it so the
//! external renderer drops to its disconnected look.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::Store;
use crate::libs::widget::WidgetStore;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the widget command.
#[derive(Debug, Args)]
pub struct WidgetArgs {
    /// Remove the published snapshot instead of refreshing it
    #[arg(long, short)]
    clear: bool,
}

pub fn cmd(args: WidgetArgs) -> Result<()> {
    if args.clear {
        WidgetStore::new().clear()?;
        msg_success!(Message::WidgetCleared);
        return Ok(());
    }

    let config = Config::read()?;
    let portal_config = config.portal()?;
    let store = Store::new(&portal_config.login);

    let Some(cache) = store.load_weeks() else {
        msg_bail_anyhow!(Message::NoCachedData);
    };

    let profile = store.load_profile();
    let context = refresh::context(&portal_config.login, &cache, &profile)?;
    if refresh::republish(&context, &profile, &cache)? {
        msg_success!(Message::WidgetPublished);
    } else {
        msg_info!(Message::WidgetUnchanged);
    }
    Ok(())
}
