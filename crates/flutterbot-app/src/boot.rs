//! Startup wiring: config loading and translation into engine settings.

use std::path::Path;
use std::time::Duration;

use flutterbot_ai::{GatewayConfig, SessionConfig, SurrogateReplies};
use flutterbot_common::{defaults, ConfigError};
use flutterbot_config::schema::{GatewaySection, SessionSection};
use flutterbot_config::FlutterbotConfig;

use crate::cli::Args;

/// Load the config named on the command line, or the platform default.
pub fn load(path: Option<&Path>) -> Result<FlutterbotConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = flutterbot_config::toml_loader::load_from_path(path)?;
            flutterbot_config::validation::validate(&config)?;
            Ok(config)
        }
        None => flutterbot_config::load_config(),
    }
}

/// Apply command-line overrides on top of the file config. Overridden
/// values are held to the same bounds as the file's.
pub fn apply_overrides(config: &mut FlutterbotConfig, args: &Args) -> Result<(), ConfigError> {
    if let Some(model) = &args.model {
        config.gateway.model = model.clone();
    }
    if let Some(window) = args.history_window {
        config.session.history_window = window;
    }
    flutterbot_config::validation::validate(config)
}

/// Gateway settings without a credential; see [`GatewayConfig::from_env`].
pub fn gateway_config(section: &GatewaySection, api_key: Option<String>) -> GatewayConfig {
    GatewayConfig {
        endpoint: section.endpoint.clone(),
        model: section.model.clone(),
        system_prompt: section.system_prompt.clone(),
        temperature: section.temperature,
        max_tokens: section.max_tokens,
        timeout: Duration::from_secs(u64::from(section.timeout_secs)),
        api_key,
    }
}

/// Session settings. `api_key_env` is filled into replies that mention it.
pub fn session_config(section: &SessionSection, api_key_env: &str) -> SessionConfig {
    let replies = &section.replies;
    let fill = |text: &str| defaults::with_api_key_env(text, api_key_env);
    SessionConfig::default()
        .with_history_window(section.history_window as usize)
        .with_greeting(section.greeting.clone())
        .with_typing_delay(Duration::from_millis(u64::from(section.typing_delay_ms)))
        .with_replies(SurrogateReplies {
            missing_credential: fill(&replies.missing_credential),
            http_error: fill(&replies.http_error),
            network_error: fill(&replies.network_error),
            malformed_response: fill(&replies.malformed_response),
        })
}

/// `tracing` filter directive covering every FlutterBot crate at `level`.
pub fn log_directive(level: &str) -> String {
    ["flutterbot", "flutterbot_ai", "flutterbot_config", "flutterbot_common"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn gateway_config_copies_section() {
        let mut section = GatewaySection::default();
        section.model = "llama3-70b-8192".into();
        section.timeout_secs = 15;

        let config = gateway_config(&section, Some("gsk_test".into()));
        assert_eq!(config.model, "llama3-70b-8192");
        assert_eq!(config.endpoint, section.endpoint);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
    }

    #[test]
    fn session_config_copies_section() {
        let mut section = SessionSection::default();
        section.history_window = 2;
        section.typing_delay_ms = 0;
        section.replies.network_error = "Offline.".into();

        let config = session_config(&section, "GROQ_API_KEY");
        assert_eq!(config.history_window, 2);
        assert_eq!(config.typing_delay, Duration::ZERO);
        assert_eq!(config.replies.network_error, "Offline.");
        assert_eq!(config.greeting, section.greeting);
    }

    #[test]
    fn missing_credential_reply_names_configured_variable() {
        let section = SessionSection::default();

        let config = session_config(&section, "OPENAI_API_KEY");
        assert_eq!(
            config.replies.missing_credential,
            "Error: API key is missing. Set OPENAI_API_KEY and try again."
        );

        let config = session_config(&section, "GROQ_API_KEY");
        assert_eq!(
            config.replies.missing_credential,
            SurrogateReplies::default().missing_credential
        );
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = FlutterbotConfig::default();
        let args = Args::parse_from(["flutterbot", "-m", "gemma-7b-it", "--history-window", "9"]);

        apply_overrides(&mut config, &args).unwrap();
        assert_eq!(config.gateway.model, "gemma-7b-it");
        assert_eq!(config.session.history_window, 9);
    }

    #[test]
    fn cli_history_window_is_bounded_like_the_file() {
        let mut config = FlutterbotConfig::default();
        let args = Args::parse_from(["flutterbot", "--history-window", "500"]);

        let err = apply_overrides(&mut config, &args).unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("history_window")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn cli_blank_model_is_rejected() {
        let mut config = FlutterbotConfig::default();
        let args = Args::parse_from(["flutterbot", "-m", "  "]);
        assert!(apply_overrides(&mut config, &args).is_err());
    }

    #[test]
    fn load_explicit_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gateway]\nmax_tokens = 0\n").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn log_directive_lists_all_crates() {
        let directive = log_directive("debug");
        assert!(directive.starts_with("flutterbot=debug,"));
        assert!(directive.contains("flutterbot_ai=debug"));
        assert_eq!(directive.split(',').count(), 4);
    }
}
