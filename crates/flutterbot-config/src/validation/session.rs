use crate::schema::FlutterbotConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate session constraints.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &FlutterbotConfig) {
    let session = &config.session;

    validate_range(
        errors,
        "session.history_window",
        session.history_window,
        0,
        100,
    );
    validate_range(
        errors,
        "session.typing_delay_ms",
        session.typing_delay_ms,
        0,
        10_000,
    );
    validate_not_blank(errors, "session.greeting", &session.greeting);

    let replies = &session.replies;
    validate_not_blank(
        errors,
        "session.replies.missing_credential",
        &replies.missing_credential,
    );
    validate_not_blank(errors, "session.replies.http_error", &replies.http_error);
    validate_not_blank(errors, "session.replies.network_error", &replies.network_error);
    validate_not_blank(
        errors,
        "session.replies.malformed_response",
        &replies.malformed_response,
    );
}
