use serde::Serialize;

use crate::domain::types::Slug;

/// Fixed marketing page in the use-cases directory.
///
/// Use cases are editorial pages that change with the product narrative, not
/// with content operations, so they live in code rather than the store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UseCase {
    pub slug: Slug,
    pub title: String,
    pub summary: String,
    pub points: Vec<String>,
}

/// The directory shown at `/use-cases`, in display order.
pub fn directory() -> Vec<UseCase> {
    [
        (
            "product-teams",
            "Product teams",
            "Plan, ship and announce releases from one place.",
            vec![
                "Roadmap snapshots your customers can follow",
                "Changelog entries published alongside each release",
            ],
        ),
        (
            "customer-support",
            "Customer support",
            "Close the loop between tickets and product fixes.",
            vec![
                "Link conversations to the release that resolves them",
                "Notify waiting customers automatically",
            ],
        ),
        (
            "marketing-teams",
            "Marketing teams",
            "Turn shipped work into launch content without chasing engineers.",
            vec![
                "Draft announcements from changelog entries",
                "Measure which launches drive signups",
            ],
        ),
    ]
    .into_iter()
    .map(|(slug, title, summary, points)| UseCase {
        slug: Slug::from_raw(slug.to_string()),
        title: title.to_string(),
        summary: summary.to_string(),
        points: points.into_iter().map(str::to_string).collect(),
    })
    .collect()
}

/// Looks up a single use case by slug.
pub fn find(slug: &str) -> Option<UseCase> {
    directory().into_iter().find(|u| u.slug.as_str() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_slugs_are_unique() {
        let all = directory();
        let mut slugs: Vec<&str> = all.iter().map(|u| u.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), all.len());
    }

    #[test]
    fn finds_known_use_case() {
        assert!(find("product-teams").is_some());
        assert!(find("nonexistent").is_none());
    }
}
