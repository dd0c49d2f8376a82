//! Telegram bot notifier.

use std::time::Duration;

use tracing::{debug, warn};

use super::Notifier;

/// Default Telegram Bot API base URL.
const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Send timeout, independent of the booking client's timeouts.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of a failed response body to log.
const LOGGED_BODY_LEN: usize = 200;

/// Errors from a single send attempt.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// HTTP request failed. The request URL is stripped because it carries
    /// the bot token.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Telegram answered with a non-200 status
    #[error("telegram returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        NotifyError::Http(e.without_url())
    }
}

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub token: String,
    /// Target chat
    pub chat_id: String,
    /// API base URL
    pub api_base: String,
    /// Send timeout
    pub timeout: Duration,
}

impl TelegramConfig {
    /// Create a config for the given bot and chat.
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            chat_id: chat_id.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the configuration only when both token and chat id are known.
    pub fn from_parts(token: Option<String>, chat_id: Option<String>) -> Option<Self> {
        match (token, chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some(Self::new(token, chat_id))
            }
            _ => None,
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }
}

/// Notifier that posts to a Telegram chat through the Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a new notifier.
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            url: config.send_message_url(),
            chat_id: config.chat_id,
        })
    }

    /// Send a message, reporting the failure to the caller.
    pub async fn try_send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(&self.url)
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body: body.chars().take(LOGGED_BODY_LEN).collect(),
            });
        }

        Ok(())
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) {
        match self.try_send(text).await {
            Ok(()) => debug!("telegram notification sent"),
            Err(NotifyError::Rejected { status, body }) => {
                warn!("Telegram notify failed: {status} {body}")
            }
            Err(e) => warn!("Telegram notify error: {e}"),
        }
    }
}
