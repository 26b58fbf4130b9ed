use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, NonEmptyString};

/// Contact-sales request captured from the marketing site.
///
/// Write-only from the site's perspective; sales tooling reads it elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewContactRequest {
    pub name: NonEmptyString,
    pub email: EmailAddress,
    pub company: Option<NonEmptyString>,
    pub team_size: Option<NonEmptyString>,
    pub message: NonEmptyString,
    pub created_at: NaiveDateTime,
}
