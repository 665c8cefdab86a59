//! Default settings shared by the engine and the config file schema.

pub const ENDPOINT: &str = "https://api.groq.com/v1/chat/completions";
pub const MODEL: &str = "mixtral-8x7b-32768";
pub const SYSTEM_PROMPT: &str =
    "You are FlutterBot, a helpful chatbot for Flutter-related questions.";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 1024;
pub const TIMEOUT_SECS: u32 = 60;
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

pub const BOT_NAME: &str = "FlutterBot";
pub const GREETING: &str = "Hi there! I'm FlutterBot. How can I help you today?";
pub const HISTORY_WINDOW: u32 = 5;

/// Placeholder replaced with the credential variable's name.
pub const API_KEY_ENV_PLACEHOLDER: &str = "{api_key_env}";

pub const MISSING_CREDENTIAL_REPLY: &str =
    "Error: API key is missing. Set {api_key_env} and try again.";
pub const HTTP_ERROR_REPLY: &str = "I'm sorry, something went wrong while talking to Groq API.";
pub const NETWORK_ERROR_REPLY: &str =
    "I'm sorry, I couldn't reach the server. Please check your connection and try again.";
pub const MALFORMED_RESPONSE_REPLY: &str =
    "I'm sorry, I received an unexpected response. Please try again.";

/// Fill in the credential variable name wherever `template` mentions it.
pub fn with_api_key_env(template: &str, var: &str) -> String {
    template.replace(API_KEY_ENV_PLACEHOLDER, var)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_reply_names_variable() {
        assert_eq!(
            with_api_key_env(MISSING_CREDENTIAL_REPLY, "OPENAI_API_KEY"),
            "Error: API key is missing. Set OPENAI_API_KEY and try again."
        );
    }

    #[test]
    fn text_without_placeholder_is_unchanged() {
        assert_eq!(with_api_key_env(NETWORK_ERROR_REPLY, "X"), NETWORK_ERROR_REPLY);
    }
}
