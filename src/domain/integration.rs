use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ImageUrl, IntegrationId, IntegrationName, NonEmptyString, SiteUrl, Slug};

/// One entry in the integrations directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub id: IntegrationId,
    pub name: IntegrationName,
    pub slug: Slug,
    /// Directory section the integration is grouped under ("Analytics", "CRM", ...).
    pub category: NonEmptyString,
    pub description: Option<NonEmptyString>,
    pub logo_url: Option<ImageUrl>,
    pub site_url: Option<SiteUrl>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Integration`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIntegration {
    pub name: IntegrationName,
    pub slug: Slug,
    pub category: NonEmptyString,
    pub description: Option<NonEmptyString>,
    pub logo_url: Option<ImageUrl>,
    pub site_url: Option<SiteUrl>,
}
