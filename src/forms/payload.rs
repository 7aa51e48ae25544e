use std::collections::BTreeMap;

use serde::Serialize;

/// Field values gathered when a form is submitted, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload(BTreeMap<String, String>);

impl SubmissionPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[cfg(test)]
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// A field counts as filled in when it is present and not the empty
    /// string.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).map_or(false, |value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for SubmissionPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Request for the outbound email service behind the contact form, in the
/// template's parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_payload(payload: &SubmissionPayload) -> Self {
        let value = |name: &str| payload.get(name).unwrap_or_default().to_string();
        Self {
            from_name: value("name"),
            from_email: value("email"),
            subject: value("subject"),
            message: value("message"),
        }
    }
}
