use std::env;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub cors_enabled: bool,
    pub database: DatabaseConfig,
}

/// Connection settings for the database the health check pings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl: bool,
    pub pool_size: u32,
    pub health_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Config {
            server_port: parse_or(&lookup, "PORT", 3000)?,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format,
            cors_enabled: parse_bool_or(&lookup, "CORS_ENABLED", false)?,
            database: DatabaseConfig {
                host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(&lookup, "DB_PORT", 5432)?,
                user: lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
                password: lookup("DB_PASSWORD").unwrap_or_else(|| "postgres".to_string()),
                name: lookup("DB_NAME").unwrap_or_else(|| "event_processor_dev".to_string()),
                ssl: parse_bool_or(&lookup, "DB_SSL", false)?,
                pool_size: parse_or(&lookup, "DB_POOL_SIZE", 10)?,
                health_timeout: Duration::from_millis(parse_or(
                    &lookup,
                    "DB_HEALTH_TIMEOUT_MS",
                    5000,
                )?),
            },
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Disable
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(!config.cors_enabled);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.pool_size, 10);
        assert_eq!(config.database.health_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "json"),
            ("CORS_ENABLED", "true"),
            ("DB_HOST", "db.internal"),
            ("DB_SSL", "1"),
            ("DB_HEALTH_TIMEOUT_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.cors_enabled);
        assert_eq!(config.database.host, "db.internal");
        assert!(config.database.ssl);
        assert_eq!(config.database.health_timeout, Duration::from_millis(250));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn invalid_bool_is_rejected() {
        assert!(config_from(&[("DB_SSL", "yes please")]).is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
