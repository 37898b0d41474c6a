//! Configuration loading from the process environment.

use crate::config::schema::{ServerConfig, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Resolve the server configuration from `SERVER_HOST` and `SERVER_PORT`.
///
/// Missing or invalid values fall back to defaults with a warning; this
/// never fails.
pub fn load_from_env() -> ServerConfig {
    load_with(|key| std::env::var(key).ok())
}

/// Resolve configuration through an arbitrary variable lookup.
///
/// The lookup indirection keeps resolution deterministic under test without
/// mutating the process environment.
fn load_with(lookup: impl Fn(&str) -> Option<String>) -> ServerConfig {
    let host = match lookup("SERVER_HOST") {
        Some(host) if !host.is_empty() => host,
        _ => DEFAULT_SERVER_HOST.to_string(),
    };

    let port = match lookup("SERVER_PORT") {
        Some(raw) if !raw.is_empty() => match raw.parse::<u16>() {
            Ok(port) if port != 0 => port,
            Ok(_) => {
                tracing::warn!(
                    value = %raw,
                    "Server port must be non-zero. Defaulting to {}",
                    DEFAULT_SERVER_PORT
                );
                DEFAULT_SERVER_PORT
            }
            Err(error) => {
                tracing::warn!(
                    value = %raw,
                    error = %error,
                    "Could not parse server port. Defaulting to {}",
                    DEFAULT_SERVER_PORT
                );
                DEFAULT_SERVER_PORT
            }
        },
        _ => {
            tracing::warn!(
                "Could not get server port. Defaulting to {}",
                DEFAULT_SERVER_PORT
            );
            DEFAULT_SERVER_PORT
        }
    };

    ServerConfig { host, port }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load_with(env(&[]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_fully_specified_environment() {
        let config = load_with(env(&[("SERVER_HOST", "0.0.0.0"), ("SERVER_PORT", "9000")]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_non_numeric_port_falls_back() {
        let config = load_with(env(&[("SERVER_PORT", "notanumber")]));
        assert_eq!(config.port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_zero_port_falls_back() {
        let config = load_with(env(&[("SERVER_PORT", "0")]));
        assert_eq!(config.port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = load_with(env(&[("SERVER_HOST", ""), ("SERVER_PORT", "")]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_out_of_range_port_falls_back() {
        let config = load_with(env(&[("SERVER_PORT", "70000")]));
        assert_eq!(config.port, DEFAULT_SERVER_PORT);
    }
}
