use log::warn;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which engine acquisition strategy is in effect for this process.
/// Resolved once at startup, never per-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentEnvironment {
    /// Desktop machine with an installed browser.
    Local,
    /// Managed/constrained runtime with a bundled minimal binary.
    Sandboxed,
    /// An already-running rendering service reached over its
    /// DevTools WebSocket endpoint.
    Remote,
}

/// Immutable process-wide engine configuration, injected into the
/// provisioner constructor.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub environment: DeploymentEnvironment,
    /// WebSocket endpoint of the remote rendering service; required
    /// when `environment` is `Remote`.
    pub remote_endpoint: Option<String>,
    /// Overrides the per-OS default browser binary path.
    pub browser_path: Option<PathBuf>,
    /// Bound on engine launch/connect.
    pub acquire_timeout: Duration,
    /// Bound on the whole render, enforced at the request boundary.
    pub render_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            environment: DeploymentEnvironment::Local,
            remote_endpoint: None,
            browser_path: None,
            acquire_timeout: Duration::from_secs(20),
            render_timeout: Duration::from_secs(30),
        }
    }
}

impl EngineConfig {
    /// Reads the configuration from the process environment, starting
    /// from the defaults.
    ///
    /// `DEPLOYMENT` picks the strategy explicitly; when it is unset,
    /// the presence of `AWS_REGION` (exported by the managed runtime)
    /// selects the sandboxed strategy, otherwise local.
    pub fn from_env() -> Self {
        let defaults = EngineConfig::default();

        let environment = match env::var("DEPLOYMENT") {
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "local" => DeploymentEnvironment::Local,
                "sandboxed" => DeploymentEnvironment::Sandboxed,
                "remote" => DeploymentEnvironment::Remote,
                other => {
                    warn!(
                        "unknown DEPLOYMENT value `{}`, assuming {:?}",
                        other, defaults.environment
                    );
                    defaults.environment
                }
            },
            Err(_) if env::var("AWS_REGION").is_ok() => DeploymentEnvironment::Sandboxed,
            Err(_) => defaults.environment,
        };

        EngineConfig {
            environment,
            remote_endpoint: env::var("RENDERER_WS_URL").ok(),
            browser_path: env::var("CHROME_PATH").ok().map(PathBuf::from),
            acquire_timeout: seconds_var("ACQUIRE_TIMEOUT_SECONDS", defaults.acquire_timeout),
            render_timeout: seconds_var("RENDER_TIMEOUT_SECONDS", defaults.render_timeout),
        }
    }
}

fn seconds_var(name: &str, default: Duration) -> Duration {
    match env::var(name) {
        Ok(value) => match value.parse() {
            Ok(seconds) => Duration::from_secs(seconds),
            Err(_) => {
                warn!(
                    "unparsable {} value `{}`, using {:?}",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_local_with_bounded_timeouts() {
        let config = EngineConfig::default();

        assert_eq!(config.environment, DeploymentEnvironment::Local);
        assert!(config.remote_endpoint.is_none());
        assert!(config.browser_path.is_none());
        assert_eq!(config.acquire_timeout, Duration::from_secs(20));
        assert_eq!(config.render_timeout, Duration::from_secs(30));
    }

    // Each test owns a distinct variable name so parallel runs cannot
    // interfere with one another.

    #[test]
    fn test_seconds_var_parses_a_plain_number() {
        unsafe { env::set_var("CONFIG_TEST_SECONDS_OK", "45") };

        assert_eq!(
            seconds_var("CONFIG_TEST_SECONDS_OK", Duration::from_secs(9)),
            Duration::from_secs(45)
        );
    }

    #[test]
    fn test_seconds_var_unset_falls_back_to_default() {
        assert_eq!(
            seconds_var("CONFIG_TEST_SECONDS_UNSET", Duration::from_secs(9)),
            Duration::from_secs(9)
        );
    }

    #[test]
    fn test_seconds_var_unparsable_falls_back_to_default() {
        unsafe { env::set_var("CONFIG_TEST_SECONDS_BAD", "soon") };

        assert_eq!(
            seconds_var("CONFIG_TEST_SECONDS_BAD", Duration::from_secs(9)),
            Duration::from_secs(9)
        );
    }
}
