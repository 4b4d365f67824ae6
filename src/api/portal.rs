use super::Session;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::payload::{ErrorEnvelope, PortalData, RawResponse};
use crate::libs::secret::Secret;
use crate::libs::theme::Theme;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header::ACCEPT, Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

const TOKEN_FILE_PREFIX: &str = ".portal_token_";
const SECRET_FILE_PREFIX: &str = ".portal_secret_";

/// Fixed delay before each attempt; the first one fires immediately.
const RETRY_DELAYS_MS: [u64; 3] = [0, 350, 1_000];

/// Statuses worth a blind retry. Everything else is a real answer.
const RETRYABLE_STATUS: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// How much of an undecodable body makes it into the error message.
const BODY_SNIPPET_BYTES: usize = 300;

/// Failures the portal can produce, from worst (unreachable) to mundane
/// (a token that simply aged out).
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Portal URL is invalid")]
    InvalidUrl,
    #[error("Login or password rejected by the portal")]
    InvalidCredentials,
    #[error("Session was invalidated by the portal")]
    TokenInvalidated,
    #[error("Session expired")]
    TokenExpired,
    #[error("Unexpected portal response: {0}")]
    BadResponse(String),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Badge portal client.
///
/// One instance per command invocation; the retry counter tracks rejected
/// password attempts across the session loop in [`Session::fetch`].
pub struct Portal {
    client: Client,
    config: PortalConfig,
    retry: i32,
}

impl Portal {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            retry: 0,
        }
    }

    /// Pushes theme and weekly objective to the portal account.
    ///
    /// Requires an existing session token; preference changes never prompt
    /// for a password. The response carries a fresh payload and token like
    /// any login, so callers can refresh their caches from it.
    pub async fn push_preferences(&self, theme: Theme, minutes_objective: i64) -> Result<PortalData> {
        let token_file_path = DataStorage::new().get_path(&self.token_file())?;
        let token_file_path_str = token_file_path.to_str().unwrap();
        let token =
            <Self as Session>::read_token(token_file_path_str).map_err(|_| msg_error_anyhow!(Message::TokenMissing(self.config.login.clone())))?;

        let fields = BTreeMap::from([
            ("action", "update_preferences".to_string()),
            ("token", token),
            ("theme", theme.as_str().to_string()),
            ("minutes_objective", minutes_objective.to_string()),
        ]);

        let data = self.post(fields, false).await?;
        <Self as Session>::store_fresh_token(token_file_path_str, &data);
        Ok(data)
    }

    /// Sends one form-encoded action, retrying transient failures on the
    /// fixed delay ladder.
    ///
    /// `token_login` changes how a 401 reads: an expired session rather
    /// than a wrong password.
    async fn post(&self, fields: BTreeMap<&'static str, String>, token_login: bool) -> Result<PortalData, PortalError> {
        let url = Self::normalized_url(&self.config.base_url).ok_or(PortalError::InvalidUrl)?;
        let url = Url::parse(&url).map_err(|_| PortalError::InvalidUrl)?;

        for attempt in 0..RETRY_DELAYS_MS.len() {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_millis(RETRY_DELAYS_MS[attempt])).await;
            }

            let response = match self.client.post(url.clone()).header(ACCEPT, "application/json").form(&fields).send().await {
                Ok(response) => response,
                Err(error) => {
                    if Self::should_retry_transport(&error, attempt) {
                        continue;
                    }
                    return Err(PortalError::Transport(error));
                }
            };

            let status = response.status();
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(error) => {
                    if Self::should_retry_transport(&error, attempt) {
                        continue;
                    }
                    return Err(PortalError::Transport(error));
                }
            };

            if !status.is_success() {
                if Self::should_retry_status(status, attempt) {
                    continue;
                }
                return Err(Self::classify_failure(status, &body, token_login));
            }

            return Self::decode_payload(&body);
        }

        Err(PortalError::BadResponse("connection failed".to_string()))
    }

    /// Maps a non-2xx answer to the most specific error available.
    fn classify_failure(status: StatusCode, body: &[u8], token_login: bool) -> PortalError {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            if envelope.token_invalidated == Some(true) {
                return PortalError::TokenInvalidated;
            }
            if let Some(message) = envelope.error {
                if status == StatusCode::UNAUTHORIZED {
                    return Self::unauthorized(token_login);
                }
                return PortalError::BadResponse(message);
            }
        }

        if status == StatusCode::UNAUTHORIZED {
            return Self::unauthorized(token_login);
        }

        PortalError::BadResponse(format!("server error ({})", status.as_u16()))
    }

    fn unauthorized(token_login: bool) -> PortalError {
        if token_login {
            PortalError::TokenExpired
        } else {
            PortalError::InvalidCredentials
        }
    }

    /// Decodes a 2xx body and normalizes it.
    ///
    /// A payload-level `error` mentioning cached data is not a failure:
    /// the portal answered from its own cache and the data is merely
    /// stale, which the payload itself reports via
    /// [`PortalData::is_stale`].
    fn decode_payload(body: &[u8]) -> Result<PortalData, PortalError> {
        let raw: RawResponse = match serde_json::from_slice(body) {
            Ok(raw) => raw,
            Err(_) => {
                if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
                    if let Some(message) = envelope.error {
                        return Err(PortalError::BadResponse(message));
                    }
                }
                let snippet = String::from_utf8_lossy(&body[..body.len().min(BODY_SNIPPET_BYTES)]).trim().to_string();
                return Err(PortalError::BadResponse(format!("unexpected reply: {}", snippet)));
            }
        };

        let data = raw.normalize(Local::now().date_naive());
        if let Some(message) = data.error.as_deref() {
            if !message.to_lowercase().contains("using cached data") {
                return Err(PortalError::BadResponse(message.to_string()));
            }
        }
        Ok(data)
    }

    fn should_retry_status(status: StatusCode, attempt: usize) -> bool {
        attempt + 1 < RETRY_DELAYS_MS.len() && RETRYABLE_STATUS.contains(&status.as_u16())
    }

    fn should_retry_transport(error: &reqwest::Error, attempt: usize) -> bool {
        attempt + 1 < RETRY_DELAYS_MS.len() && (error.is_connect() || error.is_timeout())
    }

    /// Normalizes the configured base URL: trimmed, scheme defaulted to
    /// http, trailing slash guaranteed. `None` when nothing is left.
    pub fn normalized_url(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut url = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };

        if !url.ends_with('/') {
            url.push('/');
        }

        Some(url)
    }
}

impl Session for Portal {
    async fn login(&self, password: &str) -> Result<PortalData> {
        let fields = BTreeMap::from([
            ("action", "login".to_string()),
            ("username", self.config.login.clone()),
            ("password", password.to_string()),
        ]);
        Ok(self.post(fields, false).await?)
    }

    async fn token_login(&self, token: &str) -> Result<PortalData> {
        let fields = BTreeMap::from([
            ("action", "login".to_string()),
            ("username", self.config.login.clone()),
            ("token", token.to_string()),
        ]);
        Ok(self.post(fields, true).await?)
    }

    fn token_file(&self) -> String {
        format!("{}{}", TOKEN_FILE_PREFIX, self.config.login)
    }

    fn secret(&self) -> Secret {
        Secret::new(&format!("{}{}", SECRET_FILE_PREFIX, self.config.login), "Enter your portal password")
    }

    fn retry(&self) -> i32 {
        self.retry
    }

    fn inc_retry(&mut self) {
        self.retry += 1;
    }

    fn is_token_rejection(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<PortalError>(),
            Some(PortalError::TokenExpired) | Some(PortalError::TokenInvalidated)
        )
    }

    fn is_credential_rejection(error: &anyhow::Error) -> bool {
        matches!(error.downcast_ref::<PortalError>(), Some(PortalError::InvalidCredentials))
    }
}

/// Badge portal connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PortalConfig {
    pub base_url: String,
    pub login: String,
}

impl PortalConfig {
    /// Interactive setup, pre-filling existing values as defaults.
    pub fn init(config: &Option<PortalConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(PortalConfig {
            base_url: String::new(),
            login: String::new(),
        });
        Ok(Self {
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPortalUrl.to_string())
                .default(default.base_url)
                .interact_text()?,
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPortalLogin.to_string())
                .default(default.login)
                .interact_text()?,
        })
    }
}
