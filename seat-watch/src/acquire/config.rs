//! Acquisition loop configuration.

use std::time::Duration;

use crate::domain::ServiceTime;

/// Shortest allowed pause between poll cycles (seconds).
pub const MIN_INTERVAL_SECS: u64 = 3;

/// Longest allowed pause between poll cycles (seconds).
pub const MAX_INTERVAL_SECS: u64 = 300;

/// Default number of trains attempted per range-mode cycle.
pub const DEFAULT_LIMIT: usize = 3;

/// Re-logins allowed per run before giving up.
pub const MAX_RELOGIN_ATTEMPTS: u32 = 3;

/// Clamp a configured poll interval into the allowed range. Negative
/// values take the minimum.
pub fn clamp_interval(secs: i64) -> u64 {
    u64::try_from(secs).map_or(MIN_INTERVAL_SECS, |secs| {
        secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS)
    })
}

/// Which trains a run is after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Any of the earliest trains with general seats.
    Range {
        /// Maximum trains attempted per cycle.
        limit: usize,
        /// Latest acceptable departure time.
        end_time: Option<ServiceTime>,
    },

    /// Only the train departing exactly at the query's time cursor.
    Exact,
}

impl SearchMode {
    pub fn is_exact(&self) -> bool {
        matches!(self, SearchMode::Exact)
    }
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Range {
            limit: DEFAULT_LIMIT,
            end_time: None,
        }
    }
}

/// Configuration for one acquisition run.
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// Search mode.
    pub mode: SearchMode,

    /// Pause between cycles, always within
    /// [`MIN_INTERVAL_SECS`, `MAX_INTERVAL_SECS`].
    interval_secs: u64,

    /// Re-logins allowed per run.
    pub max_relogin_attempts: u32,
}

impl AcquireConfig {
    /// Create a new configuration. The interval is clamped.
    pub fn new(mode: SearchMode, interval_secs: i64) -> Self {
        Self {
            mode,
            interval_secs: clamp_interval(interval_secs),
            max_relogin_attempts: MAX_RELOGIN_ATTEMPTS,
        }
    }

    /// Set the poll interval. The interval is clamped.
    pub fn with_interval(mut self, secs: i64) -> Self {
        self.interval_secs = clamp_interval(secs);
        self
    }

    /// Effective poll interval in seconds.
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Effective poll interval.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            interval_secs: MIN_INTERVAL_SECS,
            max_relogin_attempts: MAX_RELOGIN_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AcquireConfig::default();

        assert_eq!(
            config.mode,
            SearchMode::Range {
                limit: 3,
                end_time: None
            }
        );
        assert_eq!(config.interval_secs(), 3);
        assert_eq!(config.max_relogin_attempts, 3);
    }

    #[test]
    fn interval_is_clamped() {
        assert_eq!(AcquireConfig::new(SearchMode::Exact, -1).interval_secs(), 3);
        assert_eq!(AcquireConfig::new(SearchMode::Exact, 0).interval_secs(), 3);
        assert_eq!(AcquireConfig::new(SearchMode::Exact, 1).interval_secs(), 3);
        assert_eq!(AcquireConfig::new(SearchMode::Exact, 3).interval_secs(), 3);
        assert_eq!(AcquireConfig::new(SearchMode::Exact, 45).interval_secs(), 45);
        assert_eq!(AcquireConfig::new(SearchMode::Exact, 300).interval_secs(), 300);
        assert_eq!(
            AcquireConfig::new(SearchMode::Exact, 1000).interval(),
            Duration::from_secs(300)
        );
        assert_eq!(
            AcquireConfig::default().with_interval(i64::MAX).interval_secs(),
            300
        );
    }

    #[test]
    fn mode_kind() {
        assert!(SearchMode::Exact.is_exact());
        assert!(!SearchMode::default().is_exact());
    }
}
