use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub media_dir: PathBuf,
    pub media_base_url: String,
    pub presign_ttl: Duration,
    pub ranking_interval: Duration,
    pub ranking_size: usize,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let number = |key: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(key) {
                Some(value) => {
                    let parsed = value.trim().parse::<u64>();
                    match parsed {
                        Ok(n) if n > 0 => Ok(n),
                        _ => Err(ConfigError::InvalidNumber { key, value }),
                    }
                }
                None => Ok(default),
            }
        };

        Ok(AppConfig {
            database_url: text("DATABASE_URL", "interviews.db"),
            bind_addr: text("BIND_ADDR", "127.0.0.1:5000"),
            media_dir: PathBuf::from(text("MEDIA_DIR", "media")),
            media_base_url: text("MEDIA_BASE_URL", "http://localhost:5000/media"),
            presign_ttl: Duration::from_secs(number("PRESIGN_TTL_SECS", 3600)?),
            ranking_interval: Duration::from_secs(number("RANKING_INTERVAL_SECS", 86_400)?),
            ranking_size: number("RANKING_SIZE", 5)? as usize,
            bcrypt_cost: bcrypt_cost(number("BCRYPT_COST", u64::from(bcrypt::DEFAULT_COST))?)?,
        })
    }
}

// bcrypt accepts costs 4 through 31
fn bcrypt_cost(cost: u64) -> Result<u32, ConfigError> {
    match u32::try_from(cost) {
        Ok(cost @ 4..=31) => Ok(cost),
        _ => Err(ConfigError::InvalidNumber {
            key: "BCRYPT_COST",
            value: cost.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_url, "interviews.db");
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.presign_ttl, Duration::from_secs(3600));
        assert_eq!(config.ranking_interval, Duration::from_secs(86_400));
        assert_eq!(config.ranking_size, 5);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "/tmp/test.db"),
            ("RANKING_INTERVAL_SECS", "10"),
            ("RANKING_SIZE", "3"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "/tmp/test.db");
        assert_eq!(config.ranking_interval, Duration::from_secs(10));
        assert_eq!(config.ranking_size, 3);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("RANKING_SIZE", "five")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "RANKING_SIZE", .. }));

        assert!(AppConfig::from_lookup(lookup(&[("PRESIGN_TTL_SECS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("BCRYPT_COST", "3")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("BCRYPT_COST", "40")])).is_err());
    }
}
