//! Inquiry form field model, validation and request payload

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Named inputs of the inquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InquiryField {
    FirstName,
    LastName,
    Email,
    Phone,
    /// Repeatable checkbox group
    Services,
    Budget,
    Details,
}

impl InquiryField {
    /// Every field, in form order
    pub const ALL: [InquiryField; 7] = [
        InquiryField::FirstName,
        InquiryField::LastName,
        InquiryField::Email,
        InquiryField::Phone,
        InquiryField::Services,
        InquiryField::Budget,
        InquiryField::Details,
    ];

    /// The `name` attribute of the input(s)
    pub fn name(&self) -> &'static str {
        match self {
            InquiryField::FirstName => "firstName",
            InquiryField::LastName => "lastName",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::Services => "services",
            InquiryField::Budget => "budget",
            InquiryField::Details => "details",
        }
    }

    pub fn is_required(&self) -> bool {
        self.validator().is_some()
    }

    /// Predicate a required field's raw value must satisfy
    pub fn validator(&self) -> Option<fn(&str) -> bool> {
        match self {
            InquiryField::FirstName | InquiryField::LastName => Some(is_non_blank),
            InquiryField::Email => Some(is_valid_required_email),
            _ => None,
        }
    }
}

impl std::fmt::Display for InquiryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_valid_required_email(value: &str) -> bool {
    is_non_blank(value) && is_valid_email(value)
}

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Loose `local@domain.tld` check: no whitespace, one `@`, a dot in the domain.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Raw values read from the form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Values of the checked service checkboxes, in document order
    pub services: Vec<String>,
    pub budget: String,
    pub details: String,
}

impl InquiryValues {
    /// Raw value for a single-valued field; `None` for the checkbox group
    pub fn get(&self, field: InquiryField) -> Option<&str> {
        match field {
            InquiryField::FirstName => Some(&self.first_name),
            InquiryField::LastName => Some(&self.last_name),
            InquiryField::Email => Some(&self.email),
            InquiryField::Phone => Some(&self.phone),
            InquiryField::Services => None,
            InquiryField::Budget => Some(&self.budget),
            InquiryField::Details => Some(&self.details),
        }
    }

    /// Required fields failing their validator, in form order
    pub fn invalid_fields(&self) -> Vec<InquiryField> {
        InquiryField::ALL
            .iter()
            .copied()
            .filter(InquiryField::is_required)
            .filter(|field| match (field.validator(), self.get(*field)) {
                (Some(check), Some(value)) => !check(value),
                _ => false,
            })
            .collect()
    }

    /// Build the outbound payload stamped with `at`
    pub fn into_payload(self, at: DateTime<Utc>) -> InquiryPayload {
        InquiryPayload {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            services: self.services,
            budget: self.budget,
            details: self.details,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// JSON body of the outbound inquiry request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<String>,
    pub budget: String,
    pub details: String,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
}

impl InquiryPayload {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jane() -> InquiryValues {
        InquiryValues {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane @example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_required_fields_and_names() {
        let required: Vec<_> = InquiryField::ALL
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name())
            .collect();
        assert_eq!(required, vec!["firstName", "lastName", "email"]);
    }

    #[test]
    fn test_blank_form_reports_required_fields_only() {
        let values = InquiryValues {
            phone: "not a phone".to_string(),
            budget: "??".to_string(),
            ..Default::default()
        };
        assert_eq!(
            values.invalid_fields(),
            vec![
                InquiryField::FirstName,
                InquiryField::LastName,
                InquiryField::Email
            ]
        );
    }

    #[test]
    fn test_valid_values_have_no_invalid_fields() {
        assert!(jane().invalid_fields().is_empty());
    }

    #[test]
    fn test_whitespace_names_are_invalid() {
        let values = InquiryValues {
            first_name: "   ".to_string(),
            last_name: String::new(),
            ..jane()
        };
        assert_eq!(
            values.invalid_fields(),
            vec![InquiryField::FirstName, InquiryField::LastName]
        );
    }

    #[test]
    fn test_malformed_email_is_invalid() {
        for email in ["foo@bar", "not-an-email", "  "] {
            let values = InquiryValues {
                email: email.to_string(),
                ..jane()
            };
            assert_eq!(values.invalid_fields(), vec![InquiryField::Email], "{email}");
        }
    }

    #[test]
    fn test_payload_json_shape() {
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 14, 30, 0).unwrap();
        let values = InquiryValues {
            services: vec!["catering".to_string(), "bartending".to_string()],
            ..jane()
        };
        let json: serde_json::Value =
            serde_json::from_str(&values.into_payload(at).to_json().unwrap()).unwrap();

        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["phone"], "");
        assert_eq!(json["services"][1], "bartending");
        assert_eq!(json["budget"], "");
        assert_eq!(json["details"], "");
        assert_eq!(json["timestamp"], "2026-05-01T14:30:00.000Z");
    }

    #[test]
    fn test_payload_timestamp_parses() {
        let payload = jane().into_payload(Utc::now());
        assert!(DateTime::parse_from_rfc3339(&payload.timestamp).is_ok());
    }
}
