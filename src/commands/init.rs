//! Application configuration initialization command.
//!
//! Interactive setup wizard for first-time use: portal URL and login,
//! widget theme, weekly objective. Connection parameters land in
//! `config.json`; theme and objective land in the per-login profile.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::Store;
use crate::libs::theme::Theme;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// With `--delete`, removes the configuration file and reports whether
/// one existed. Otherwise runs the wizard, pre-filling every prompt with
/// the current values so re-running only changes what the user edits.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;

    // Per-login presentation profile rides along with the wizard.
    let portal_config = config.portal()?;
    let store = Store::new(&portal_config.login);
    let mut profile = store.load_profile();

    let labels: Vec<&str> = Theme::ALL.iter().map(|theme| theme.label()).collect();
    let current = Theme::ALL.iter().position(|theme| theme.as_str() == profile.theme).unwrap_or(0);
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTheme.to_string())
        .items(&labels)
        .default(current)
        .interact()?;
    profile.theme = Theme::ALL[picked].as_str().to_string();

    let hours: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptObjectiveHours.to_string())
        .default(profile.minutes_objective / 60)
        .interact_text()?;
    profile.minutes_objective = hours.clamp(1, 60) * 60;

    store.save_profile(&profile)?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
