use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::contact::NewContactRequest;
use crate::domain::types::{EmailAddress, NonEmptyString, TypeConstraintError};

/// Normalizes an optional free-text field: trimmed, empty becomes `None`.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub company: Option<String>,
    pub team_size: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormPayload {
    pub name: NonEmptyString,
    pub email: EmailAddress,
    pub company: Option<NonEmptyString>,
    pub team_size: Option<NonEmptyString>,
    pub message: NonEmptyString,
}

impl ContactFormPayload {
    pub fn into_new_request(self) -> NewContactRequest {
        NewContactRequest {
            name: self.name,
            email: self.email,
            company: self.company,
            team_size: self.team_size,
            message: self.message,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactFormError {
    #[error("Contact form validation failed: {0}")]
    Validation(String),
    #[error("Contact form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ContactFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ContactFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ContactForm> for ContactFormPayload {
    type Error = ContactFormError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: NonEmptyString::new_for_field(value.name, "name")?,
            email: EmailAddress::new(value.email)?,
            company: normalize_optional(value.company)
                .map(|c| NonEmptyString::new_for_field(c, "company"))
                .transpose()?,
            team_size: normalize_optional(value.team_size)
                .map(|t| NonEmptyString::new_for_field(t, "team size"))
                .transpose()?,
            message: NonEmptyString::new_for_field(value.message, "message")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_valid_form() {
        let form = ContactForm {
            name: " Dana ".to_string(),
            email: "dana@example.com".to_string(),
            company: None,
            team_size: None,
            message: "We need a changelog.".to_string(),
        };

        let payload: ContactFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Dana");
        assert!(payload.company.is_none());
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let form = ContactForm {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            company: Some("   ".to_string()),
            team_size: Some("11-50".to_string()),
            message: "Hi".to_string(),
        };

        let payload: ContactFormPayload = form.try_into().unwrap();
        assert!(payload.company.is_none());
        assert_eq!(payload.team_size.unwrap().as_str(), "11-50");
    }

    #[test]
    fn rejects_invalid_email() {
        let form = ContactForm {
            name: "Dana".to_string(),
            email: "not-an-email".to_string(),
            company: None,
            team_size: None,
            message: "Hi".to_string(),
        };

        let payload: Result<ContactFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn payload_carries_fields_into_new_request() {
        let form = ContactForm {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            company: Some("Acme".to_string()),
            team_size: None,
            message: "Hi".to_string(),
        };

        let payload: ContactFormPayload = form.try_into().unwrap();
        let request = payload.into_new_request();
        assert_eq!(request.email.as_str(), "dana@example.com");
        assert_eq!(request.company.unwrap().as_str(), "Acme");
    }
}
