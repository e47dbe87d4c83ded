use axum::http::HeaderValue;
use chrono::{FixedOffset, Offset, Utc};

/// Largest accepted timeline offset, one minute short of a day.
const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Minutes east of UTC used to decide which calendar day a timestamp
    /// falls on (default: `0`).
    pub timeline_offset_minutes: i32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `3000`                  |
    /// | `CORS_ORIGINS`                | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `TIMELINE_UTC_OFFSET_MINUTES` | `0`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");

        let port = parse("PORT", var("PORT", "3000"), "a valid u16")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "a valid u64",
        )?;

        let raw_offset = var("TIMELINE_UTC_OFFSET_MINUTES", "0");
        let timeline_offset_minutes: i32 = parse(
            "TIMELINE_UTC_OFFSET_MINUTES",
            raw_offset.clone(),
            "an integer between -1439 and 1439",
        )?;
        if timeline_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid {
                var: "TIMELINE_UTC_OFFSET_MINUTES",
                expected: "an integer between -1439 and 1439",
                value: raw_offset,
            });
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            timeline_offset_minutes,
        })
    }

    /// The fixed offset timeline days are computed in.
    pub fn timeline_offset(&self) -> FixedOffset {
        // Hand-built configs skip the load-time range check.
        FixedOffset::east_opt(self.timeline_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, ["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.timeline_offset().local_minus_utc(), 0);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[("CORS_ORIGINS", "http://a.test, http://b.test,")]).unwrap();
        assert_eq!(config.cors_origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn timeline_offset_is_range_checked() {
        let config = load(&[("TIMELINE_UTC_OFFSET_MINUTES", "-300")]).unwrap();
        assert_eq!(config.timeline_offset().local_minus_utc(), -300 * 60);

        assert!(load(&[("TIMELINE_UTC_OFFSET_MINUTES", "1440")]).is_err());
        assert!(load(&[("TIMELINE_UTC_OFFSET_MINUTES", "east")]).is_err());
    }

    #[test]
    fn invalid_port_fails_fast() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
