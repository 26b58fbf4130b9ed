use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::integration::{
    Integration as DomainIntegration, NewIntegration as DomainNewIntegration,
};
use crate::domain::types::{
    ImageUrl, IntegrationName, NonEmptyString, SiteUrl, Slug, TypeConstraintError,
};

/// Diesel model representing the `integrations` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::integrations)]
pub struct Integration {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub site_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Integration`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::integrations)]
pub struct NewIntegration {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub site_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Integration> for DomainIntegration {
    type Error = TypeConstraintError;

    fn try_from(integration: Integration) -> Result<Self, Self::Error> {
        Ok(Self {
            id: integration.id.try_into()?,
            name: IntegrationName::new(integration.name)?,
            slug: Slug::new(integration.slug)?,
            category: NonEmptyString::new_for_field(integration.category, "integration category")?,
            description: integration
                .description
                .map(NonEmptyString::new)
                .transpose()?,
            logo_url: integration.logo_url.map(ImageUrl::new).transpose()?,
            site_url: integration.site_url.map(SiteUrl::new).transpose()?,
            created_at: integration.created_at,
            updated_at: integration.updated_at,
        })
    }
}

impl NewIntegration {
    pub fn from_domain(integration: DomainNewIntegration, now: NaiveDateTime) -> Self {
        Self {
            name: integration.name.into_inner(),
            slug: integration.slug.into_inner(),
            category: integration.category.into_inner(),
            description: integration.description.map(NonEmptyString::into_inner),
            logo_url: integration.logo_url.map(ImageUrl::into_inner),
            site_url: integration.site_url.map(SiteUrl::into_inner),
            created_at: now,
            updated_at: now,
        }
    }
}
