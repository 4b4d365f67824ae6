//! Session teardown command.
//!
//! Forgets everything that could re-authenticate or re-render: the
//! cached token, the encrypted password, the weeks cache and the
//! published widget snapshot. The declared absences stay; they are user
//! data, not session state.

use crate::api::{Portal, Session};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::Store;
use crate::libs::widget::WidgetStore;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let portal_config = config.portal()?;

    let portal = Portal::new(&portal_config);
    // Missing token or password cache is already the desired state.
    let _ = portal.delete_token();
    portal.secret().forget()?;

    Store::new(&portal_config.login).clear_weeks()?;
    WidgetStore::new().clear()?;

    msg_success!(Message::LoggedOut);
    Ok(())
}
