use log::{debug, info, warn};

use crate::error::SubmissionError;
use crate::forms::definitions::FormKind;
use crate::forms::payload::{ContactMessage, SubmissionPayload};
use crate::validation::email;

/// Runs a form's submission rules against its payload. On success returns
/// the message to show the user. Nothing leaves the browser.
pub fn submit(kind: FormKind, payload: &SubmissionPayload) -> Result<&'static str, SubmissionError> {
    let missing: Vec<&'static str> = kind
        .required_fields()
        .filter(|name| !payload.is_filled(name))
        .collect();

    if !missing.is_empty() {
        warn!("Rejected {} submission, missing fields: {:?}", kind.id(), missing);
        return Err(SubmissionError::MissingRequiredFields(missing));
    }

    if kind.checks_email_on_submit() && !email::is_valid(payload.get("email").unwrap_or_default()) {
        warn!("Rejected {} submission, invalid email", kind.id());
        return Err(SubmissionError::InvalidEmailShape);
    }

    if kind == FormKind::Contact {
        let request = ContactMessage::from_payload(payload);
        match serde_json::to_string(&request) {
            Ok(json) => debug!("Prepared contact delivery request: {}", json),
            Err(e) => warn!("Could not serialize contact delivery request: {}", e),
        }
    }

    info!("Accepted {} submission", kind.id());
    Ok(kind.success_message())
}
