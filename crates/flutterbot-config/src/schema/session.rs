//! Conversation session configuration.

use flutterbot_common::defaults;
use serde::{Deserialize, Serialize};

/// Replies shown in place of a model answer when a turn fails.
///
/// `{api_key_env}` in any reply is replaced with `gateway.api_key_env`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepliesConfig {
    pub missing_credential: String,
    pub http_error: String,
    pub network_error: String,
    pub malformed_response: String,
}

impl Default for RepliesConfig {
    fn default() -> Self {
        Self {
            missing_credential: defaults::MISSING_CREDENTIAL_REPLY.into(),
            http_error: defaults::HTTP_ERROR_REPLY.into(),
            network_error: defaults::NETWORK_ERROR_REPLY.into(),
            malformed_response: defaults::MALFORMED_RESPONSE_REPLY.into(),
        }
    }
}

/// Session behaviour: context window, greeting, typing simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Display name used by the terminal front end.
    pub bot_name: String,
    pub greeting: String,
    /// Number of prior messages sent as context (valid range: 0-100).
    pub history_window: u32,
    /// Simulated typing delay before each request (valid range: 0-10000).
    pub typing_delay_ms: u32,
    pub replies: RepliesConfig,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            bot_name: defaults::BOT_NAME.into(),
            greeting: defaults::GREETING.into(),
            history_window: defaults::HISTORY_WINDOW,
            typing_delay_ms: 1500,
            replies: RepliesConfig::default(),
        }
    }
}
