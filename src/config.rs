//! Remote game configuration
//!
//! Settings are read from `MASTERMIND_*` environment variables and may then
//! be overridden from the command line.

use std::time::Duration;

/// Game server used when `MASTERMIND_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://ikariera.etnetera.cz/veletrhy";

/// Per-request timeout used when `MASTERMIND_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for talking to the remote game server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub timeout: Duration,
}

/// Player identity sent when a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub nickname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} is not set (use --{field} or {var})")]
    MissingIdentity {
        field: &'static str,
        var: &'static str,
    },
    #[error("{var}={value} is not a whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            nickname: None,
            email: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RemoteConfig {
    /// Read `MASTERMIND_BASE_URL`, `MASTERMIND_NICKNAME`, `MASTERMIND_EMAIL`
    /// and `MASTERMIND_TIMEOUT_SECS` from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidTimeout` if the timeout is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidTimeout` if the timeout is not a number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = non_empty("MASTERMIND_BASE_URL") {
            config.base_url = url;
        }
        config.nickname = non_empty("MASTERMIND_NICKNAME");
        config.email = non_empty("MASTERMIND_EMAIL");

        if let Some(raw) = non_empty("MASTERMIND_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: "MASTERMIND_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Apply command-line values on top of the environment
    #[must_use]
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        nickname: Option<String>,
        email: Option<String>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if nickname.is_some() {
            self.nickname = nickname;
        }
        if email.is_some() {
            self.email = email;
        }
        self
    }

    /// Resolve the player identity; both fields are required
    ///
    /// # Errors
    /// Returns `ConfigError::MissingIdentity` naming the first missing field.
    pub fn identity(&self) -> Result<Identity, ConfigError> {
        let nickname = self
            .nickname
            .clone()
            .ok_or(ConfigError::MissingIdentity {
                field: "nickname",
                var: "MASTERMIND_NICKNAME",
            })?;
        let email = self.email.clone().ok_or(ConfigError::MissingIdentity {
            field: "email",
            var: "MASTERMIND_EMAIL",
        })?;

        Ok(Identity { nickname, email })
    }

    /// Full URL for an endpoint such as `start` or `guess`
    #[must_use]
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = RemoteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RemoteConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn reads_all_variables() {
        let config = RemoteConfig::from_lookup(lookup(&[
            ("MASTERMIND_BASE_URL", "http://localhost:8080/api/"),
            ("MASTERMIND_NICKNAME", "breaker"),
            ("MASTERMIND_EMAIL", "breaker@example.com"),
            ("MASTERMIND_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint("start"), "http://localhost:8080/api/start");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.identity().unwrap(),
            Identity {
                nickname: "breaker".to_string(),
                email: "breaker@example.com".to_string(),
            }
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let config =
            RemoteConfig::from_lookup(lookup(&[("MASTERMIND_NICKNAME", "  ")])).unwrap();
        assert_eq!(config.nickname, None);
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let err = RemoteConfig::from_lookup(lookup(&[("MASTERMIND_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn overrides_win_over_environment() {
        let config = RemoteConfig::from_lookup(lookup(&[("MASTERMIND_NICKNAME", "env")]))
            .unwrap()
            .with_overrides(None, Some("cli".to_string()), None);

        assert_eq!(config.nickname.as_deref(), Some("cli"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_email_is_reported() {
        let config = RemoteConfig::default().with_overrides(None, Some("x".to_string()), None);
        assert_eq!(
            config.identity().unwrap_err(),
            ConfigError::MissingIdentity {
                field: "email",
                var: "MASTERMIND_EMAIL"
            }
        );
    }
}
