use log::debug;

use crate::error::FieldError;
use crate::validation::{email, phone};

/// What kind of control a field is rendered as, which also decides the
/// type-specific check it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
    Date,
    Time,
}

impl FieldKind {
    /// The `type` attribute for kinds rendered as `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Text | FieldKind::Select | FieldKind::Textarea => "text",
        }
    }
}

/// Border colour shown on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Neutral,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(outcome: Result<(), FieldError>) -> Self {
        match outcome {
            Ok(()) => ValidationResult { valid: true, message: None },
            Err(e) => ValidationResult { valid: false, message: Some(e.to_string()) },
        }
    }
}

/// Checks a single value. Whitespace around the value is ignored and the
/// type-specific checks only run on non-empty values.
pub fn check(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Err(FieldError::MissingRequiredField)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !email::is_valid(value) => Err(FieldError::InvalidEmailShape),
        FieldKind::Tel if !phone::is_valid(value) => Err(FieldError::InvalidPhoneShape),
        _ => Ok(()),
    }
}

/// A form control and its validation state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub raw_value: String,
    pub kind: FieldKind,
    pub required: bool,
    pub has_error_annotation: bool,
    pub indicator: Indicator,
    /// Text of the inline error message below the field, if one is shown.
    pub error_message: Option<String>,
}

impl FormField {
    pub fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            raw_value: String::new(),
            kind,
            required,
            has_error_annotation: false,
            indicator: Indicator::Neutral,
            error_message: None,
        }
    }

    /// Re-checks the current value and updates the annotation, indicator
    /// and inline message to match.
    pub fn validate(&mut self) -> ValidationResult {
        self.has_error_annotation = false;

        let outcome = check(self.kind, self.required, &self.raw_value);
        match &outcome {
            Ok(()) => {
                self.indicator = Indicator::Success;
                self.error_message = None;
            }
            Err(e) => {
                self.has_error_annotation = true;
                self.indicator = Indicator::Error;
                self.error_message = Some(e.to_string());
            }
        }

        debug!("Validated field '{}': {:?}", self.name, outcome);
        outcome.into()
    }

    /// Focus left the field.
    pub fn on_blur(&mut self) -> ValidationResult {
        self.validate()
    }

    /// The value changed. Phone numbers are reformatted as they are typed.
    /// Only a field already showing an error is re-checked, so a first
    /// entry is not flagged halfway through.
    pub fn on_input(&mut self, value: String) -> Option<ValidationResult> {
        self.raw_value = match self.kind {
            FieldKind::Tel => phone::format_as_typed(&value),
            _ => value,
        };

        if self.has_error_annotation {
            Some(self.validate())
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.raw_value.clear();
        self.has_error_annotation = false;
        self.indicator = Indicator::Neutral;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(kind: FieldKind, required: bool, value: &str) -> FormField {
        let mut field = FormField::new("field", kind, required);
        field.raw_value = value.to_string();
        field
    }

    #[test]
    fn empty_required_field_is_invalid() {
        let mut field = field_with(FieldKind::Text, true, "   ");
        let result = field.on_blur();

        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some("This field is required."));
        assert!(field.has_error_annotation);
        assert_eq!(field.indicator, Indicator::Error);
        assert_eq!(field.error_message.as_deref(), Some("This field is required."));
    }

    #[test]
    fn plain_optional_field_is_always_valid() {
        for value in ["", "anything at all", "   "] {
            let mut field = field_with(FieldKind::Text, false, value);
            assert_eq!(field.on_blur(), ValidationResult { valid: true, message: None });
            assert!(!field.has_error_annotation);
        }
    }

    #[test]
    fn email_and_phone_shapes_are_checked_when_present() {
        assert_eq!(
            check(FieldKind::Email, false, "x@y"),
            Err(FieldError::InvalidEmailShape)
        );
        assert_eq!(check(FieldKind::Email, true, " a@b.com "), Ok(()));
        assert_eq!(check(FieldKind::Email, false, ""), Ok(()));

        assert_eq!(
            check(FieldKind::Tel, true, "1234567890"),
            Err(FieldError::InvalidPhoneShape)
        );
        assert_eq!(check(FieldKind::Tel, true, "08031234567"), Ok(()));
        assert_eq!(check(FieldKind::Tel, false, ""), Ok(()));
    }

    #[test]
    fn required_check_wins_over_shape_checks() {
        assert_eq!(
            check(FieldKind::Email, true, ""),
            Err(FieldError::MissingRequiredField)
        );
        assert_eq!(
            check(FieldKind::Tel, true, " "),
            Err(FieldError::MissingRequiredField)
        );
    }

    #[test]
    fn messages_match_each_error() {
        let mut email = field_with(FieldKind::Email, true, "not-an-email");
        assert_eq!(
            email.on_blur().message.as_deref(),
            Some("Please enter a valid email address.")
        );

        let mut tel = field_with(FieldKind::Tel, true, "12345");
        assert_eq!(
            tel.on_blur().message.as_deref(),
            Some("Please enter a valid Nigerian phone number.")
        );
    }

    #[test]
    fn fixing_a_field_clears_its_error() {
        let mut field = field_with(FieldKind::Email, true, "a@b");
        field.on_blur();
        assert!(field.has_error_annotation);

        field.raw_value = "a@b.com".to_string();
        let result = field.on_blur();
        assert!(result.valid);
        assert!(!field.has_error_annotation);
        assert_eq!(field.indicator, Indicator::Success);
        assert_eq!(field.error_message, None);
    }

    #[test]
    fn repeated_failures_keep_a_single_message() {
        let mut field = field_with(FieldKind::Email, true, "");
        field.on_blur();
        assert_eq!(field.error_message.as_deref(), Some("This field is required."));

        field.raw_value = "a@b".to_string();
        field.on_blur();
        assert_eq!(
            field.error_message.as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn input_only_revalidates_annotated_fields() {
        let mut field = FormField::new("email", FieldKind::Email, true);
        assert_eq!(field.on_input("a@".to_string()), None);
        assert_eq!(field.indicator, Indicator::Neutral);

        field.on_blur();
        assert!(field.has_error_annotation);

        let result = field.on_input("a@b.co".to_string());
        assert_eq!(result, Some(ValidationResult { valid: true, message: None }));
        assert!(!field.has_error_annotation);

        // No longer annotated, so typing a bad value goes unchecked until blur.
        assert_eq!(field.on_input("a@b".to_string()), None);
        assert_eq!(field.indicator, Indicator::Success);
    }

    #[test]
    fn phone_input_is_formatted() {
        let mut field = FormField::new("phone", FieldKind::Tel, true);
        field.on_input("0803 123 4567".to_string());
        assert_eq!(field.raw_value, "+2348031234567");
        assert!(field.on_blur().valid);
    }

    #[test]
    fn reset_returns_to_pristine() {
        let mut field = field_with(FieldKind::Text, true, "");
        field.on_blur();
        field.raw_value = "x".to_string();
        field.reset();
        assert_eq!(field, FormField::new("field", FieldKind::Text, true));
    }
}
