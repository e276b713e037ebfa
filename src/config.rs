/*!
 * Configuration
 *
 * Runtime configuration for tracing output and COM initialization
 */

use crate::runtime::{ApartmentModel, ComRuntime, RuntimeBridge};
use serde::{Deserialize, Serialize};

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "ADSI_TRACE_JSON";
/// Tracing filter directives
pub const ENV_LOG_FILTER: &str = "RUST_LOG";
/// `multithreaded` (default) or `apartment`
pub const ENV_COM_APARTMENT: &str = "ADSI_COM_APARTMENT";

/// Crate configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsiConfig {
    /// Emit JSON-formatted logs
    pub trace_json: bool,
    /// `EnvFilter` directives
    pub log_filter: String,
    /// Threading model passed to the runtime bridge
    pub apartment: ApartmentModel,
}

impl Default for AdsiConfig {
    fn default() -> Self {
        Self {
            trace_json: false,
            log_filter: "info".to_string(),
            apartment: ApartmentModel::Multithreaded,
        }
    }
}

impl AdsiConfig {
    /// Warnings and errors only
    pub fn quiet() -> Self {
        Self {
            log_filter: "warn".to_string(),
            ..Self::default()
        }
    }

    /// Every delegated call, including rejected ones
    pub fn verbose() -> Self {
        Self {
            log_filter: "adsi=trace,info".to_string(),
            ..Self::default()
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from an arbitrary key lookup
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let trace_json = lookup(ENV_TRACE_JSON)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.trace_json);

        let log_filter = lookup(ENV_LOG_FILTER)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let apartment = match lookup(ENV_COM_APARTMENT) {
            Some(raw) => raw.parse::<ApartmentModel>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring {}", ENV_COM_APARTMENT);
                defaults.apartment
            }),
            None => defaults.apartment,
        };

        Self {
            trace_json,
            log_filter,
            apartment,
        }
    }

    /// Build a runtime for `bridge` with this configuration's apartment model
    pub fn runtime(&self, bridge: impl RuntimeBridge + 'static) -> ComRuntime {
        ComRuntime::new(bridge, self.apartment)
    }
}
