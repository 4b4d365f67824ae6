//! Portal authentication command.
//!
//! The session layer resolves credentials on its own: a cached token
//! first, then the encrypted password cache, then an interactive prompt
//! with a bounded number of retries. A successful login also primes the
//! weeks cache and publishes the widget snapshot, so the renderer is
//! live right after the first command.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::refresh;
use crate::libs::store::Store;
use crate::{msg_success, msg_warning};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let portal_config = config.portal()?;

    let store = Store::new(&portal_config.login);
    let cache = refresh::sync(&portal_config, &store).await?;
    if cache.stale {
        msg_warning!(Message::StaleData);
    }

    let profile = store.load_profile();
    let context = refresh::context(&portal_config.login, &cache, &profile)?;
    refresh::republish(&context, &profile, &cache)?;

    msg_success!(Message::LoginSuccess(portal_config.login.clone()));
    Ok(())
}
