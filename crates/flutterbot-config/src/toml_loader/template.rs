//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# FlutterBot Configuration
# Only override what you want to change -- missing fields use defaults.

[gateway]
# endpoint = "https://api.groq.com/v1/chat/completions"
# model = "mixtral-8x7b-32768"
# system_prompt = "You are FlutterBot, a helpful chatbot for Flutter-related questions."
# temperature = 0.7      # 0.0-2.0
# max_tokens = 1024      # 1-32768
# timeout_secs = 60      # 1-600
# api_key_env = "GROQ_API_KEY"

[session]
# bot_name = "FlutterBot"
# greeting = "Hi there! I'm FlutterBot. How can I help you today?"
# history_window = 5     # 0-100 prior messages sent as context
# typing_delay_ms = 1500 # 0-10000

[session.replies]
# {api_key_env} is replaced with gateway.api_key_env
# missing_credential = "Error: API key is missing. Set {api_key_env} and try again."
# http_error = "I'm sorry, something went wrong while talking to Groq API."
# network_error = "I'm sorry, I couldn't reach the server. Please check your connection and try again."
# malformed_response = "I'm sorry, I received an unexpected response. Please try again."

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
