//! Completion gateway configuration.

use flutterbot_common::defaults;
use serde::{Deserialize, Serialize};

/// Remote chat-completion endpoint settings.
///
/// The credential itself never lives in the file; `api_key_env` names the
/// environment variable it is read from at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySection {
    pub endpoint: String,
    pub model: String,
    pub system_prompt: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    pub max_tokens: u32,
    /// Total request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    pub api_key_env: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            endpoint: defaults::ENDPOINT.into(),
            model: defaults::MODEL.into(),
            system_prompt: defaults::SYSTEM_PROMPT.into(),
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
            timeout_secs: defaults::TIMEOUT_SECS,
            api_key_env: defaults::API_KEY_ENV.into(),
        }
    }
}
