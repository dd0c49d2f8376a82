//! Command-line surface.
//!
//! Flags fall back to environment variables (which may come from a `.env`
//! file) and are resolved into the settings for one run.

use clap::Parser;
use tracing::warn;

use crate::acquire::{AcquireConfig, DEFAULT_LIMIT, SearchMode};
use crate::booking::DEFAULT_BASE_URL;
use crate::domain::{SearchQuery, ServiceDate, ServiceTime, StationName, normalize_member_id};
use crate::notify::TelegramConfig;

/// Process exit code when credentials are missing.
pub const EXIT_MISSING_CREDENTIALS: u8 = 2;

/// Errors resolving the command line into run settings.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing credentials. Provide --id/--pw or set BOOKING_ID/BOOKING_PW in .env")]
    MissingCredentials,
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingCredentials => EXIT_MISSING_CREDENTIALS,
        }
    }
}

/// Poll the booking service and auto-reserve general seats.
#[derive(Debug, Parser)]
#[command(name = "seat-watch", version)]
pub struct Args {
    /// Member ID (membership number, e-mail or phone)
    #[arg(long = "id", env = "BOOKING_ID", hide_env_values = true)]
    pub member_id: Option<String>,

    /// Account password
    #[arg(long = "pw", env = "BOOKING_PW", hide_env_values = true)]
    pub password: Option<String>,

    /// Departure station
    #[arg(long, default_value = "동대구")]
    pub dep: StationName,

    /// Arrival station
    #[arg(long, default_value = "광명")]
    pub arr: StationName,

    /// Date YYYYMMDD (default: today)
    #[arg(long)]
    pub date: Option<ServiceDate>,

    /// Start time HHMMSS search cursor (default: now)
    #[arg(long = "time")]
    pub dep_time: Option<ServiceTime>,

    /// Latest departure time HHMMSS; later trains are ignored
    #[arg(long = "end-time")]
    pub end_time: Option<ServiceTime>,

    /// Only watch the train departing exactly at --time (ignores --end-time/--limit)
    #[arg(long)]
    pub exact: bool,

    /// Max trains (earliest first) to attempt per poll cycle
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Polling interval in seconds (clamped to 3..=300)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub interval: i64,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat id
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// Disable Telegram notification even if a token is configured
    #[arg(long)]
    pub no_telegram: bool,

    /// Booking gateway base URL
    #[arg(long, env = "BOOKING_GATEWAY_URL", default_value = DEFAULT_BASE_URL)]
    pub gateway_url: String,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s.parse().map_err(|e| format!("{e}"))?;
    if limit == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(limit)
}

/// Login credentials, with the member ID already normalized.
#[derive(Clone)]
pub struct Credentials {
    pub member_id: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("member_id", &self.member_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub credentials: Credentials,
    pub query: SearchQuery,
    pub config: AcquireConfig,
    pub telegram: Option<TelegramConfig>,
    pub gateway_url: String,
}

impl Args {
    /// Resolve defaults and credentials into run settings.
    pub fn into_settings(self) -> Result<RunSettings, CliError> {
        let member_id = self
            .member_id
            .map(|id| normalize_member_id(id.trim()))
            .filter(|id| !id.is_empty());
        let password = self.password.filter(|pw| !pw.is_empty());
        let (Some(member_id), Some(password)) = (member_id, password) else {
            return Err(CliError::MissingCredentials);
        };

        let mode = if self.exact {
            if self.end_time.is_some() {
                warn!("--end-time is ignored in exact mode");
            }
            SearchMode::Exact
        } else {
            SearchMode::Range {
                limit: self.limit,
                end_time: self.end_time,
            }
        };

        let telegram = if self.no_telegram {
            None
        } else {
            TelegramConfig::from_parts(self.telegram_token, self.telegram_chat_id)
        };

        Ok(RunSettings {
            credentials: Credentials {
                member_id,
                password,
            },
            query: SearchQuery::new(
                self.dep,
                self.arr,
                self.date.unwrap_or_else(ServiceDate::today),
                self.dep_time.unwrap_or_else(ServiceTime::now),
            ),
            config: AcquireConfig::new(mode, self.interval),
            telegram,
            gateway_url: self.gateway_url,
        })
    }
}
