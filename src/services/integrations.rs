use crate::domain::integration::Integration;
use crate::repository::{IntegrationListQuery, IntegrationReader};
use serde::Serialize;

use super::{ServiceError, ServiceResult};

/// One directory section and its integrations, ordered by name.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationGroup {
    pub category: String,
    pub integrations: Vec<Integration>,
}

/// Everything the integrations directory template needs for one request.
#[derive(Debug)]
pub struct IntegrationsPage {
    pub groups: Vec<IntegrationGroup>,
    /// Distinct directory categories for the filter control.
    pub categories: Vec<String>,
    pub active_category: Option<String>,
}

/// Core business logic for rendering the integrations directory, optionally
/// restricted to one category.
pub fn show_integrations<R>(category: Option<String>, repo: &R) -> ServiceResult<IntegrationsPage>
where
    R: IntegrationReader,
{
    let all = match repo.list_integrations(IntegrationListQuery::default()) {
        Ok(integrations) => integrations,
        Err(e) => {
            log::error!("Failed to list integrations: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let mut categories: Vec<String> = all.iter().map(|i| i.category.to_string()).collect();
    categories.sort();
    categories.dedup();

    if let Some(active) = &category {
        if !categories.iter().any(|c| c == active) {
            return Err(ServiceError::NotFound);
        }
    }

    let groups = categories
        .iter()
        .filter(|c| category.as_ref().is_none_or(|active| active == *c))
        .map(|c| IntegrationGroup {
            category: c.clone(),
            integrations: all
                .iter()
                .filter(|i| i.category.as_str() == c.as_str())
                .cloned()
                .collect(),
        })
        .collect();

    Ok(IntegrationsPage {
        groups,
        categories,
        active_category: category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{IntegrationId, IntegrationName, NonEmptyString, Slug};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_integration(id: i32, name: &str, slug: &str, category: &str) -> Integration {
        Integration {
            id: IntegrationId::new(id).unwrap(),
            name: IntegrationName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            category: NonEmptyString::new(category).unwrap(),
            description: None,
            logo_url: None,
            site_url: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn groups_by_category_in_sorted_order() {
        let repo = TestRepository::default().with_integrations(vec![
            sample_integration(1, "Slack", "slack", "Messaging"),
            sample_integration(2, "Amplitude", "amplitude", "Analytics"),
            sample_integration(3, "Teams", "teams", "Messaging"),
        ]);

        let page = show_integrations(None, &repo).unwrap();
        assert_eq!(page.categories, ["Analytics", "Messaging"]);
        assert_eq!(page.groups.len(), 2);
        assert_eq!(page.groups[1].integrations.len(), 2);
        assert_eq!(page.groups[1].integrations[0].name.as_str(), "Slack");
    }

    #[test]
    fn category_filter_narrows_to_one_group() {
        let repo = TestRepository::default().with_integrations(vec![
            sample_integration(1, "Slack", "slack", "Messaging"),
            sample_integration(2, "Amplitude", "amplitude", "Analytics"),
        ]);

        let page = show_integrations(Some("Analytics".to_string()), &repo).unwrap();
        assert_eq!(page.groups.len(), 1);
        assert_eq!(page.groups[0].category, "Analytics");
    }

    #[test]
    fn unknown_category_is_not_found() {
        let repo = TestRepository::default()
            .with_integrations(vec![sample_integration(1, "Slack", "slack", "Messaging")]);

        let err = show_integrations(Some("CRM".to_string()), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }
}
