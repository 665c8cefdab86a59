use crate::schema::FlutterbotConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

/// Validate gateway constraints.
pub(crate) fn validate_gateway(errors: &mut Vec<String>, config: &FlutterbotConfig) {
    let gateway = &config.gateway;

    if !(gateway.endpoint.starts_with("https://") || gateway.endpoint.starts_with("http://")) {
        errors.push(format!(
            "gateway.endpoint = {:?} must be an http(s) URL",
            gateway.endpoint
        ));
    }
    validate_not_blank(errors, "gateway.model", &gateway.model);
    validate_not_blank(errors, "gateway.system_prompt", &gateway.system_prompt);
    validate_not_blank(errors, "gateway.api_key_env", &gateway.api_key_env);
    validate_range_f64(
        errors,
        "gateway.temperature",
        gateway.temperature,
        0.0,
        2.0,
    );
    validate_range(errors, "gateway.max_tokens", gateway.max_tokens, 1, 32768);
    validate_range(errors, "gateway.timeout_secs", gateway.timeout_secs, 1, 600);
}
