use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::NewContactRequest as DomainNewContactRequest;
use crate::domain::types::NonEmptyString;

/// Insertable row for the `contact_requests` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::contact_requests)]
pub struct NewContactRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub team_size: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

impl From<DomainNewContactRequest> for NewContactRequest {
    fn from(request: DomainNewContactRequest) -> Self {
        Self {
            name: request.name.into_inner(),
            email: request.email.into_inner(),
            company: request.company.map(NonEmptyString::into_inner),
            team_size: request.team_size.map(NonEmptyString::into_inner),
            message: request.message.into_inner(),
            created_at: request.created_at,
        }
    }
}
