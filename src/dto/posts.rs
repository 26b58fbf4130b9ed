use serde::Serialize;

use crate::domain::post::{Author, CategoryRef, PostSummary};

/// Date format used on cards and article headers.
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Listing card for a blog post with display-ready fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostCardDto {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub author: Option<Author>,
    pub categories: Vec<CategoryRef>,
    pub published: String,
    pub read_time_minutes: i32,
    pub main_image_url: Option<String>,
}

impl From<PostSummary> for PostCardDto {
    fn from(summary: PostSummary) -> Self {
        Self {
            slug: summary.slug.into_inner(),
            title: summary.title.into_inner(),
            excerpt: summary.excerpt.map(Into::into),
            author: summary.author,
            categories: summary.categories,
            published: summary
                .published_at
                .format(DISPLAY_DATE_FORMAT)
                .to_string(),
            read_time_minutes: summary.read_time.get(),
            main_image_url: summary.main_image_url.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{PostId, PostTitle, ReadTimeMinutes, Slug};
    use chrono::NaiveDate;

    #[test]
    fn formats_publish_date_for_display() {
        let summary = PostSummary {
            id: PostId::new(1).unwrap(),
            slug: Slug::new("launch").unwrap(),
            title: PostTitle::new("Launch").unwrap(),
            excerpt: None,
            author: None,
            categories: vec![],
            published_at: NaiveDate::from_ymd_opt(2026, 8, 6)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            read_time: ReadTimeMinutes::new(4).unwrap(),
            main_image_url: None,
        };

        let card = PostCardDto::from(summary);
        assert_eq!(card.published, "Aug 6, 2026");
        assert_eq!(card.read_time_minutes, 4);
    }
}
