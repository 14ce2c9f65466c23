//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONTACT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("missing {var} for the {relay} contact relay")]
    Missing { var: &'static str, relay: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayKind {
    Function,
    Resend,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl RelayTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for RelayTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_CONTACT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONTACT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Where contact submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayConfig {
    /// Hosted function taking the JSON payload, e.g. a Supabase edge function.
    Function { url: String, key: Option<String>, timeouts: RelayTimeouts },
    /// Direct email through Resend.
    Resend { api_key: String, from: String, to: String },
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub relay: RelayConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTACT_RELAY`: `function` (default), `resend` or `none`
    /// - `CONTACT_FUNCTION_URL`, `CONTACT_FUNCTION_KEY`: function relay target
    /// - `RESEND_API_KEY`, `CONTACT_FROM`, `CONTACT_TO`: resend relay
    /// - `CONTACT_REQUEST_TIMEOUT_SECS`: default 15
    /// - `CONTACT_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is malformed. A malformed or
    /// incomplete relay section only disables the relay.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads through `lookup`; an
    /// unknown or incomplete relay section downgrades to [`RelayConfig::Disabled`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let relay = parse_relay_kind(non_empty(&lookup, "CONTACT_RELAY").as_deref())
            .and_then(|kind| Self::relay_from(kind, &lookup));
        let relay = match relay {
            Ok(relay) => relay,
            Err(e) => {
                tracing::warn!(error = %e, "contact relay not configured; submissions disabled");
                RelayConfig::Disabled
            }
        };
        Ok(Self { port, relay })
    }

    /// Read the settings for one relay kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a required variable is unset.
    pub fn relay_from(kind: RelayKind, lookup: &impl Fn(&str) -> Option<String>) -> Result<RelayConfig, ConfigError> {
        match kind {
            RelayKind::Disabled => Ok(RelayConfig::Disabled),
            RelayKind::Function => {
                let url = non_empty(lookup, "CONTACT_FUNCTION_URL")
                    .ok_or(ConfigError::Missing { var: "CONTACT_FUNCTION_URL", relay: "function" })?;
                let timeouts = RelayTimeouts {
                    request_secs: parse_u64(lookup, "CONTACT_REQUEST_TIMEOUT_SECS", DEFAULT_CONTACT_REQUEST_TIMEOUT_SECS),
                    connect_secs: parse_u64(lookup, "CONTACT_CONNECT_TIMEOUT_SECS", DEFAULT_CONTACT_CONNECT_TIMEOUT_SECS),
                };
                Ok(RelayConfig::Function { url, key: non_empty(lookup, "CONTACT_FUNCTION_KEY"), timeouts })
            }
            RelayKind::Resend => {
                let require = |var: &'static str| non_empty(lookup, var).ok_or(ConfigError::Missing { var, relay: "resend" });
                Ok(RelayConfig::Resend {
                    api_key: require("RESEND_API_KEY")?,
                    from: require("CONTACT_FROM")?,
                    to: require("CONTACT_TO")?,
                })
            }
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    non_empty(lookup, key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_relay_kind(raw: Option<&str>) -> Result<RelayKind, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref().unwrap_or("function") {
        "function" => Ok(RelayKind::Function),
        "resend" => Ok(RelayKind::Resend),
        "none" | "off" | "disabled" => Ok(RelayKind::Disabled),
        other => Err(ConfigError::Invalid { var: "CONTACT_RELAY", value: other.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
