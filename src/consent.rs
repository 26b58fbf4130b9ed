//! Session-backed cookie-consent settings store.
//!
//! Consent lives under a single session key with an explicit unset state.
//! Templates receive the current status on every request and show the banner
//! only while it is unset; call sites never touch session storage directly.

use actix_session::{Session, SessionInsertError};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Session key the consent decision is stored under.
pub const CONSENT_SESSION_KEY: &str = "cookie_consent";

/// Visitor's cookie-consent decision.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsentStatus {
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentStatus {
    /// String representation used in templates and form submissions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl TryFrom<&str> for ConsentStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "consent decision: {other}"
            ))),
        }
    }
}

/// Reads the current consent status; a missing or unreadable value counts as
/// unset so the banner re-appears rather than the request failing.
pub fn current(session: &Session) -> ConsentStatus {
    session
        .get::<ConsentStatus>(CONSENT_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Records a consent decision for the rest of the session.
pub fn record(session: &Session, status: ConsentStatus) -> Result<(), SessionInsertError> {
    session.insert(CONSENT_SESSION_KEY, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_decisions() {
        assert_eq!(
            ConsentStatus::try_from("accepted").unwrap(),
            ConsentStatus::Accepted
        );
        assert_eq!(
            ConsentStatus::try_from(" declined ").unwrap(),
            ConsentStatus::Declined
        );
        assert!(ConsentStatus::try_from("maybe").is_err());
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(ConsentStatus::default(), ConsentStatus::Unset);
    }
}
