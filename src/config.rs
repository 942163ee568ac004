use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::rolebook::Language;
use crate::store::RetryPolicy;

/// Runtime configuration for the game server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Postgres connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    /// Optional JSON file replacing the built-in location catalog
    pub rolebook_path: Option<PathBuf>,
    /// Language of the built-in catalog
    pub language: Language,
    /// Lobby player capacity
    pub max_players: usize,
    /// Smallest roster a round can be assembled from
    pub min_players: usize,
    /// Share of eligible players (in percent, rounded up) needed to reach a quorum
    pub quorum_percent: u32,
    /// Length of the discussion round
    pub round_duration: Duration,
    /// Length of the accusation vote
    pub vote_duration: Duration,
    /// Retry behavior for conflicting document writes
    pub retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            database_url: None,
            rolebook_path: None,
            language: Language::default(),
            max_players: 8,
            min_players: 3,
            quorum_percent: 70,
            round_duration: Duration::from_secs(5 * 60),
            vote_duration: Duration::from_secs(20),
            retry: RetryPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from `SPYFALL_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: std::env::var("SPYFALL_BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            rolebook_path: std::env::var("SPYFALL_ROLEBOOK").ok().map(PathBuf::from),
            language: env_parse("SPYFALL_LANGUAGE", defaults.language),
            max_players: env_parse("SPYFALL_MAX_PLAYERS", defaults.max_players),
            min_players: env_parse("SPYFALL_MIN_PLAYERS", defaults.min_players),
            quorum_percent: env_parse("SPYFALL_QUORUM_PERCENT", defaults.quorum_percent),
            round_duration: Duration::from_secs(env_parse(
                "SPYFALL_ROUND_SECS",
                defaults.round_duration.as_secs(),
            )),
            vote_duration: Duration::from_secs(env_parse(
                "SPYFALL_VOTE_SECS",
                defaults.vote_duration.as_secs(),
            )),
            retry: RetryPolicy {
                max_attempts: env_parse("SPYFALL_TX_MAX_ATTEMPTS", defaults.retry.max_attempts),
                base_delay: Duration::from_millis(env_parse(
                    "SPYFALL_TX_BASE_DELAY_MS",
                    defaults.retry.base_delay.as_millis() as u64,
                )),
                max_delay: Duration::from_millis(env_parse(
                    "SPYFALL_TX_MAX_DELAY_MS",
                    defaults.retry.max_delay.as_millis() as u64,
                )),
            },
        }
    }

    /// Minimum roster size; a round never runs with fewer than three players
    pub fn min_roster(&self) -> usize {
        self.min_players.max(3)
    }

    /// `ceil(quorum_percent% of eligible)`, never less than one
    pub fn quorum(&self, eligible: usize) -> usize {
        let percent = self.quorum_percent.clamp(1, 100) as usize;
        ((eligible * percent + 99) / 100).max(1)
    }
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(variable = name, value = %raw, "Invalid configuration value, using default");
                default
            }
        },
        Err(_) => default,
    }
}
