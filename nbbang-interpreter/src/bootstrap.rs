use nbbang_application::MealPolicy;
use std::env;
use tracing_subscriber::EnvFilter;

const MAX_MEMO_CHARS: &str = "NBBANG_MAX_MEMO_CHARS";
const MAX_ITEM_NAME_CHARS: &str = "NBBANG_MAX_ITEM_NAME_CHARS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidLimit { key: &'static str, value: String },
}

/// Runtime settings, read from the environment and an optional `.env` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub policy: MealPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = MealPolicy::default();
        let policy = MealPolicy {
            max_memo_chars: read_limit(&lookup, MAX_MEMO_CHARS)?
                .unwrap_or(defaults.max_memo_chars),
            max_item_name_chars: read_limit(&lookup, MAX_ITEM_NAME_CHARS)?
                .unwrap_or(defaults.max_item_name_chars),
        };
        Ok(Self { policy })
    }
}

fn read_limit(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(Some(limit)),
        _ => Err(ConfigError::InvalidLimit { key, value: raw }),
    }
}

/// Logs go to stderr so reports on stdout stay clean. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
