//! Server configuration, read from the environment (and `.env` if present).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Directory served under `/static` (audio samples live here)
    pub static_dir: PathBuf,
    /// Idle time after which a session is dropped
    pub session_ttl: Duration,
    /// Fixed seed for round content; entropy when unset
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
            session_ttl: Duration::from_secs(3600),
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env::var("SWARA_HOST").unwrap_or(defaults.host),
            port: parse_var("SWARA_PORT")?.unwrap_or(defaults.port),
            static_dir: env::var("SWARA_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            session_ttl: parse_var::<u64>("SWARA_SESSION_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
            rng_seed: parse_var("SWARA_RNG_SEED")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert!(config.rng_seed.is_none());
    }

    // Each test touches its own variable so parallel tests don't collide.
    #[test]
    fn test_parse_var() {
        env::set_var("SWARA_TEST_PARSE_OK", " 8080 ");
        assert_eq!(parse_var::<u16>("SWARA_TEST_PARSE_OK").unwrap(), Some(8080));

        env::set_var("SWARA_TEST_PARSE_BAD", "eighty");
        assert!(parse_var::<u16>("SWARA_TEST_PARSE_BAD").is_err());

        assert_eq!(parse_var::<u64>("SWARA_TEST_PARSE_UNSET").unwrap(), None);
    }
}
