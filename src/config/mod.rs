//! Configuration management for the HTTP handler.
//!
//! Settings are read from a JSON document under the `"http-handler"` key,
//! merged over the defaults, validated and kept in a process-wide singleton.
//! Factories read the singleton when they build their transport.

pub mod schema;

pub use schema::HttpHandlerConfig;

use log::warn;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Key under which settings are looked up in the JSON document.
pub const SETTINGS_KEY: &str = "http-handler";

static CONFIG: Lazy<RwLock<HttpHandlerConfig>> =
    Lazy::new(|| RwLock::new(HttpHandlerConfig::default()));

/// Loads configuration from a JSON settings document.
///
/// Unparseable settings are logged and ignored. Settings that parse but fail
/// validation are rejected and the global configuration is left untouched.
///
/// # Example
///
/// ```no_run
/// use http_handler::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "http-handler": {
///         "timeout": 60000,
///         "validateSsl": false
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 60000);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<HttpHandlerConfig, String> {
    let mut config = HttpHandlerConfig::default();

    if let Some(user_settings) = settings_json
        .as_ref()
        .and_then(|settings| settings.get(SETTINGS_KEY))
    {
        // Absent fields take their serde defaults, so a parsed value is
        // already merged over the defaults.
        match serde_json::from_value::<HttpHandlerConfig>(user_settings.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => {
                warn!(
                    "Failed to parse {} settings: {}. Using defaults.",
                    SETTINGS_KEY, e
                );
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Gets a copy of the current global configuration.
pub fn get_config() -> HttpHandlerConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| HttpHandlerConfig::default())
}

/// Updates the global configuration in place.
///
/// If the result does not validate, the defaults are restored.
///
/// ```no_run
/// use http_handler::config::update_config;
///
/// update_config(|config| {
///     config.timeout = 60000;
/// });
/// ```
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut HttpHandlerConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            warn!("Configuration validation failed after update: {}", e);
            *config = HttpHandlerConfig::default();
        }
    }
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = HttpHandlerConfig::default();
    }
}
