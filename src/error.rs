use thiserror::Error;

/// Why a single field failed validation. The display text is what the
/// field's inline error message shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    MissingRequiredField,
    #[error("Please enter a valid email address.")]
    InvalidEmailShape,
    #[error("Please enter a valid Nigerian phone number.")]
    InvalidPhoneShape,
}

/// Why a whole form was rejected at submit time. The display text is shown
/// in the error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields(Vec<&'static str>),
    #[error("Please enter a valid email address.")]
    InvalidEmailShape,
}
