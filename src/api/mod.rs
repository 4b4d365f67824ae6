//! Badge portal client and its session management.
//!
//! The portal is the single external service this tool talks to. Every
//! exchange is a form-encoded POST answered with JSON, and every successful
//! login hands back both the week payload and a fresh session token. The
//! [`Session`] trait owns the credential lifecycle around those exchanges:
//! token cache restoration, encrypted password fallback with a bounded
//! number of prompts, and token storage after each success.
//!
//! ## Session flow
//!
//! 1. **Token path**: a cached token is tried first; the portal either
//!    refreshes it or rejects it as expired/invalidated
//! 2. **Password path**: on rejection (or first run) the encrypted password
//!    cache is used, prompting interactively when empty
//! 3. **Bounded retries**: wrong passwords re-prompt up to the retry limit,
//!    then fail with a clear message

use crate::libs::messages::Message;
use crate::libs::payload::PortalData;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_error_anyhow;
use anyhow::Result;
use std::fs;
use std::io::Write;

pub mod portal;

pub use portal::{Portal, PortalConfig, PortalError};

/// Maximum number of password prompts before giving up.
///
/// Prevents infinite loops when credentials are consistently invalid while
/// leaving room for ordinary typing mistakes.
const MAX_RETRY_COUNT: i32 = 3;

/// Credential lifecycle shared by portal exchanges.
///
/// Implementors provide the raw login calls; the trait supplies the
/// orchestration in [`Session::fetch`] plus token file housekeeping.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Authenticates with the password and returns the normalized payload.
    async fn login(&self, password: &str) -> Result<PortalData>;

    /// Re-authenticates with a previously issued token.
    async fn token_login(&self, token: &str) -> Result<PortalData>;

    /// File name of the cached token, unique per login.
    fn token_file(&self) -> String;

    /// Encrypted password cache with interactive prompt fallback.
    fn secret(&self) -> Secret;

    /// Current count of rejected password attempts.
    fn retry(&self) -> i32;

    /// Records one more rejected password attempt.
    fn inc_retry(&mut self);

    /// Whether this error means the cached token is no longer usable and
    /// the password path should take over.
    fn is_token_rejection(error: &anyhow::Error) -> bool;

    /// Whether this error means the password itself was rejected.
    fn is_credential_rejection(error: &anyhow::Error) -> bool;

    /// Retrieves the current payload, establishing a session as needed.
    ///
    /// The cached token is tried first. When the portal declares it
    /// expired or invalidated the token file is dropped and the password
    /// flow takes over; any other failure propagates as-is. Each success
    /// stores the fresh token the portal returned alongside the payload.
    async fn fetch(&mut self) -> Result<PortalData> {
        let token_file_path = DataStorage::new().get_path(&self.token_file())?;
        let token_file_path_str = token_file_path.to_str().unwrap();

        if let Ok(token) = Self::read_token(token_file_path_str) {
            match self.token_login(&token).await {
                Ok(data) => {
                    Self::store_fresh_token(token_file_path_str, &data);
                    return Ok(data);
                }
                Err(error) if Self::is_token_rejection(&error) => {
                    // Stale token; fall through to the password flow
                    let _ = self.delete_token();
                }
                Err(error) => return Err(error),
            }
        }

        loop {
            let password: String = match self.retry() > 0 {
                true => self.secret().prompt()?,         // Force new prompt on retry
                false => self.secret().get_or_prompt()?, // Use cache if available
            };

            match self.login(&password).await {
                Ok(data) => {
                    Self::store_fresh_token(token_file_path_str, &data);
                    return Ok(data);
                }
                Err(error) if Self::is_credential_rejection(&error) => {
                    if self.retry() < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
                Err(error) => break Err(error),
            }
        }
    }

    /// Persists the token carried by a successful payload, if any.
    fn store_fresh_token(file_name: &str, data: &PortalData) {
        if let Some(token) = data.token.as_deref() {
            let _ = Self::write_token(file_name, token);
        }
    }

    fn read_token(file_name: &str) -> Result<String> {
        Ok(fs::read_to_string(file_name)?)
    }

    fn write_token(file_name: &str, token: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(file_name)?;
        file.write_all(token.as_bytes())?;
        Ok(())
    }

    /// Deletes the cached token file, forcing a fresh login next time.
    fn delete_token(&self) -> Result<()> {
        let token_file_path = DataStorage::new().get_path(&self.token_file())?;
        fs::remove_file(token_file_path)?;
        Ok(())
    }
}
