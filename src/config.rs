use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub logging: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first when present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let timeout_secs: u64 = parse_or(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 10)?;
        let logging: bool = parse_or(&lookup, "DATABASE_LOGGING", false)?;
        let host: IpAddr = parse_or(&lookup, "SERVER_HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parse_or(&lookup, "SERVER_PORT", 8080)?;

        Ok(Self {
            database: DatabaseConfig {
                url,
                connect_timeout: Duration::from_secs(timeout_secs),
                logging,
            },
            server_addr: SocketAddr::new(host, port),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}
