use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_TTL_MINUTES: i64 = 60;
/// One year.
const MAX_JWT_TTL_MINUTES: i64 = 60 * 24 * 365;

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so it can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let ttl_minutes = match lookup("JWT_TTL_MINUTES") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(v) if v > 0 && v <= MAX_JWT_TTL_MINUTES => v,
                _ => return Err(ConfigError::Invalid { key: "JWT_TTL_MINUTES", value: raw }),
            },
            None => DEFAULT_JWT_TTL_MINUTES,
        };

        Ok(EnvConfig {
            port,
            db_url: required("DATABASE_URL")?,
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                ttl_minutes,
            },
        })
    }
}
