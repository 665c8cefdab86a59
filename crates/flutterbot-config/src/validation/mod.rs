//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod gateway;
mod helpers;
mod session;

#[cfg(test)]
mod tests;

use crate::schema::FlutterbotConfig;
use flutterbot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FlutterbotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    gateway::validate_gateway(&mut errors, config);
    session::validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
