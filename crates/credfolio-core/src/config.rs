use std::time::Duration;

use thiserror::Error;

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

const DEFAULT_USER_AGENT: &str = "credfolio/0.1 (profile-client)";

/// Errors produced while reading client configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Connection settings for the Credfolio backend.
///
/// Built once at the initialization boundary (usually via
/// [`load_client_config`]) and passed into the client; nothing in the
/// library reads the environment after construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, e.g. `http://localhost:8080/api/v1`.
    pub base_url: String,
    /// Whole-request deadline. `None` applies no client-side deadline; a
    /// stuck request then runs until network-level failure.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var carries an invalid value.
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_client_config_from_env()
}

/// Load client configuration from environment variables already in the process.
///
/// Unlike [`load_client_config`], this does NOT load `.env` files, which is
/// useful for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var carries an invalid value.
pub fn load_client_config_from_env() -> Result<ClientConfig, ConfigError> {
    build_client_config(|key| std::env::var(key))
}

/// Build client configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_client_config<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let base_url = or_default("CREDFOLIO_API_BASE_URL", DEFAULT_BASE_URL);
    let user_agent = or_default("CREDFOLIO_USER_AGENT", DEFAULT_USER_AGENT);

    // No timeout is assumed when the variable is unset: the backend contract
    // does not specify one, so applying a deadline is an explicit opt-in.
    let request_timeout = match lookup("CREDFOLIO_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "CREDFOLIO_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?;
            if secs == 0 {
                return Err(ConfigError::InvalidEnvVar {
                    var: "CREDFOLIO_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }
            Some(Duration::from_secs(secs))
        }
        Err(_) => None,
    };

    Ok(ClientConfig {
        base_url,
        request_timeout,
        user_agent,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_client_config_defaults_when_environment_is_empty() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_client_config(lookup_from_map(&map)).expect("empty env should succeed");
        assert_eq!(cfg.base_url, "http://localhost:8080/api/v1");
        assert!(cfg.request_timeout.is_none());
        assert_eq!(cfg.user_agent, "credfolio/0.1 (profile-client)");
    }

    #[test]
    fn build_client_config_base_url_override() {
        let mut map = HashMap::new();
        map.insert("CREDFOLIO_API_BASE_URL", "https://api.credfolio.dev/v1");
        let cfg = build_client_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.base_url, "https://api.credfolio.dev/v1");
    }

    #[test]
    fn build_client_config_timeout_parses_whole_seconds() {
        let mut map = HashMap::new();
        map.insert("CREDFOLIO_REQUEST_TIMEOUT_SECS", "45");
        let cfg = build_client_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn build_client_config_timeout_zero_is_invalid() {
        let mut map = HashMap::new();
        map.insert("CREDFOLIO_REQUEST_TIMEOUT_SECS", "0");
        let result = build_client_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CREDFOLIO_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CREDFOLIO_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_client_config_timeout_non_numeric_is_invalid() {
        let mut map = HashMap::new();
        map.insert("CREDFOLIO_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_client_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CREDFOLIO_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CREDFOLIO_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_client_config_user_agent_override() {
        let mut map = HashMap::new();
        map.insert("CREDFOLIO_USER_AGENT", "custom-agent/2.0");
        let cfg = build_client_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }
}
