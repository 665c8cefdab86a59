//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FlutterbotConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_endpoint() {
    let mut config = FlutterbotConfig::default();
    config.gateway.endpoint = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.endpoint"));
}

#[test]
fn accepts_plain_http_endpoint() {
    let mut config = FlutterbotConfig::default();
    config.gateway.endpoint = "http://127.0.0.1:8080/v1/chat/completions".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_model() {
    let mut config = FlutterbotConfig::default();
    config.gateway.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.model must not be empty"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = FlutterbotConfig::default();
    config.gateway.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.temperature"));
}

#[test]
fn catches_zero_max_tokens() {
    let mut config = FlutterbotConfig::default();
    config.gateway.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.max_tokens"));
}

#[test]
fn catches_zero_timeout() {
    let mut config = FlutterbotConfig::default();
    config.gateway.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.timeout_secs"));
}

#[test]
fn zero_history_window_is_allowed() {
    let mut config = FlutterbotConfig::default();
    config.session.history_window = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_history_window_too_large() {
    let mut config = FlutterbotConfig::default();
    config.session.history_window = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.history_window"));
}

#[test]
fn catches_typing_delay_too_large() {
    let mut config = FlutterbotConfig::default();
    config.session.typing_delay_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.typing_delay_ms"));
}

#[test]
fn catches_blank_reply() {
    let mut config = FlutterbotConfig::default();
    config.session.replies.network_error = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.replies.network_error"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FlutterbotConfig::default();
    config.gateway.temperature = -1.0;
    config.gateway.max_tokens = 0;
    config.session.greeting = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gateway.temperature"));
    assert!(err.contains("gateway.max_tokens"));
    assert!(err.contains("session.greeting"));
    assert_eq!(err.matches("; ").count(), 2);
}
