//! FlutterBot configuration system.
//!
//! Provides TOML-based configuration for the completion gateway, the
//! conversation session, and logging. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flutterbot_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.gateway.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::FlutterbotConfig;

use flutterbot_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default `config.toml` if none exists.
pub fn load_config() -> Result<FlutterbotConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string, as printed by
/// `flutterbot --dump-config`.
pub fn config_to_json(config: &FlutterbotConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = FlutterbotConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"gateway\""));
        assert!(json.contains("\"session\""));
        assert!(json.contains("\"replies\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = FlutterbotConfig::default();
        let json = config_to_json(&config);
        let parsed: FlutterbotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.gateway.model, "mixtral-8x7b-32768");
        assert_eq!(parsed.session.history_window, 5);
        assert_eq!(parsed.gateway.api_key_env, "GROQ_API_KEY");
    }
}
