//! Completion gateway configuration.

use std::fmt;
use std::time::Duration;

use flutterbot_common::defaults;

/// Completion gateway configuration.
#[derive(Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Bearer credential. `None` makes every call fail with
    /// `GatewayError::MissingCredential` without touching the network.
    pub api_key: Option<String>,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::ENDPOINT.to_string(),
            model: defaults::MODEL.to_string(),
            system_prompt: defaults::SYSTEM_PROMPT.to_string(),
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
            timeout: Duration::from_secs(u64::from(defaults::TIMEOUT_SECS)),
            api_key: None,
        }
    }
}

impl GatewayConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Read the credential once from the environment variable `var`
    /// (`GROQ_API_KEY` when `None`). A missing or blank variable is not an
    /// error here; it surfaces per call as `MissingCredential`.
    pub fn from_env(var: Option<&str>) -> Self {
        let var = var.unwrap_or(defaults::API_KEY_ENV);
        let api_key = std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("{var} is not set; replies will report a missing credential");
        }
        Self::new(api_key)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The credential, if present and not blank.
    pub(crate) fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
