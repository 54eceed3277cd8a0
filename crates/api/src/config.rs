//! Server configuration, selected by environment name.
//!
//! Configuration is built once at startup by [`ServerConfig::for_environment`]
//! and shared read-only through [`AppState`](crate::state::AppState). Nothing
//! reads environment variables after that point.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Deployment environment the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "testing" => Ok(Self::Testing),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Log output format for the `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown environment '{0}' (expected development, production, or testing)")]
    UnknownEnvironment(String),

    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration.
///
/// | Env Var                  | Default                                 |
/// |--------------------------|-----------------------------------------|
/// | `APP_ENV`                | `development`                           |
/// | `HOST`                   | `0.0.0.0`                               |
/// | `PORT`                   | `3000`                                  |
/// | `DATABASE_URL`           | -- (required)                           |
/// | `CORS_ORIGINS`           | `http://localhost:5173`                 |
/// | `REQUEST_TIMEOUT_SECS`   | `30`                                    |
/// | `LOG_FORMAT`             | `json` in production, `pretty` otherwise |
/// | `JWT_SECRET`             | required in production                  |
/// | `JWT_ACCESS_EXPIRY_MINS` | `120`                                   |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Build the configuration for the environment named by `APP_ENV`
    /// from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::for_environment(&env_name, |var| std::env::var(var).ok())
    }

    /// Build the configuration for `env_name`, reading variables through
    /// `lookup`. Empty values count as unset.
    pub fn for_environment<F>(env_name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = env_name.parse()?;
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let host = parse_or(&get, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&get, "PORT", 3000)?;
        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(&get, "REQUEST_TIMEOUT_SECS", 30)?;

        let default_format = if environment.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };
        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(|()| ConfigError::Invalid {
                var: "LOG_FORMAT",
                value: raw,
            })?,
            None => default_format,
        };

        let jwt = JwtConfig::for_environment(environment, &get)?;

        Ok(Self {
            environment,
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            log_format,
            jwt,
        })
    }
}

/// Parse `var` with [`FromStr`], falling back to `default` when unset.
pub(crate) fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}
