use crate::logging::DEFAULT_LOG_LEVEL;
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Environment variable ${0} is not set")]
    Missing(&'static str),
    #[error("Environment variable $PORT must be a `u16`")]
    InvalidPort,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let required = |key: &'static str| lookup(key).ok_or(Error::Missing(key));

        let port = required("PORT")?
            .parse::<u16>()
            .map_err(|_| Error::InvalidPort)?;

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(DEFAULT_BIND_ADDRESS.to_owned()),
            port,
            database_url: required("DATABASE_URL")?,
            log_level: lookup("LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL.to_owned()),
        })
    }
}
