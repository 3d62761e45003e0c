// ⚙️ Server Configuration
// Everything comes from environment variables with sensible defaults.
//
//   HOST                 bind host              (0.0.0.0)
//   PORT                 bind port              (8080)
//   LOG_LEVEL            tracing filter         (info, RUST_LOG wins)
//   JAKAL_ENV            "production" → JSON logs
//   CACHE_TTL_SECS       year/month cache TTL   (3600, 0 disables)
//   MAX_RANGE_DAYS       /range span cap        (365)
//   MAX_STATISTICS_DAYS  /statistics span cap   (730)
//   YEAR_MIN             lowest accepted year   (1900)
//   YEARS_AHEAD          years past current     (50)
//   REQUEST_TIMEOUT_SECS per-request deadline   (30)
//   RATE_LIMIT_PER_MINUTE requests per client IP (120, 0 disables)

use anyhow::{Context, Result};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub cache_ttl: Duration,
    pub max_range_days: i64,
    pub max_statistics_days: i64,
    pub year_min: i32,
    pub years_ahead: i32,
    pub request_timeout: Duration,
    pub rate_limit_per_minute: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cache_ttl: Duration::from_secs(3600),
            max_range_days: 365,
            max_statistics_days: 730,
            year_min: 1900,
            years_ahead: 50,
            request_timeout: Duration::from_secs(30),
            rate_limit_per_minute: 120,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for each variable. Missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let log_format = match lookup("JAKAL_ENV").as_deref() {
            Some("production") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(ServerConfig {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format,
            cache_ttl: Duration::from_secs(parse_var(
                &lookup,
                "CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )?),
            max_range_days: parse_var(&lookup, "MAX_RANGE_DAYS", defaults.max_range_days)?,
            max_statistics_days: parse_var(
                &lookup,
                "MAX_STATISTICS_DAYS",
                defaults.max_statistics_days,
            )?,
            year_min: parse_var(&lookup, "YEAR_MIN", defaults.year_min)?,
            years_ahead: parse_var(&lookup, "YEARS_AHEAD", defaults.years_ahead)?,
            request_timeout: Duration::from_secs(parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            rate_limit_per_minute: parse_var(
                &lookup,
                "RATE_LIMIT_PER_MINUTE",
                defaults.rate_limit_per_minute,
            )?,
        })
    }

    /// "host:port" for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Highest accepted year given the current year.
    pub fn year_max(&self, current_year: i32) -> i32 {
        current_year + self.years_ahead
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.year_max(2026), 2076);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("JAKAL_ENV", "production"),
            ("CACHE_TTL_SECS", "0"),
            ("MAX_RANGE_DAYS", "31"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("RATE_LIMIT_PER_MINUTE", "0"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.cache_ttl, Duration::ZERO);
        assert_eq!(config.max_range_days, 31);
        assert_eq!(config.max_statistics_days, 730);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.rate_limit_per_minute, 0);
    }

    #[test]
    fn test_invalid_value_names_variable() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
