//! Periodic refresh loop command.
//!
//! Re-fetches from the portal on a fixed interval, recomputes and
//! republishes the widget snapshot. Publishing is change-gated upstream,
//! so a tick with unchanged figures writes nothing and stays silent.
//! Ctrl-C exits the loop cleanly.

use crate::api::PortalConfig;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::Store;
use crate::{msg_error, msg_info};
use anyhow::Result;
use clap::Args;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Command-line arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Seconds between refreshes
    #[arg(long, short, default_value_t = 30)]
    interval: u64,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let portal_config = config.portal()?;
    let store = Store::new(&portal_config.login);

    msg_info!(Message::WatchStarted(args.interval));

    let mut ticker = interval(Duration::from_secs(args.interval.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(error) = refresh_once(&portal_config, &store).await {
                    msg_error!(Message::WatchRefreshFailed(error.to_string()));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                msg_info!(Message::WatchStopped);
                break;
            }
        }
    }
    Ok(())
}

/// One tick: fetch, recompute, republish.
async fn refresh_once(portal_config: &PortalConfig, store: &Store) -> Result<()> {
    let cache = refresh::sync(portal_config, store).await?;
    let profile = store.load_profile();
    let context = refresh::context(&portal_config.login, &cache, &profile)?;
    refresh::republish(&context, &profile, &cache)?;
    Ok(())
}
