use serde::Serialize;

use crate::domain::changelog::ChangelogEntry;
use crate::render::render_document;

const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Changelog entry with its body rendered to HTML.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryDto {
    pub slug: String,
    pub title: String,
    pub tag: Option<String>,
    pub published: String,
    pub body_html: String,
}

impl From<ChangelogEntry> for EntryDto {
    fn from(entry: ChangelogEntry) -> Self {
        Self {
            body_html: render_document(&entry.body),
            slug: entry.slug.into_inner(),
            title: entry.title.into_inner(),
            tag: entry.tag.map(Into::into),
            published: entry.published_at.format(DISPLAY_DATE_FORMAT).to_string(),
        }
    }
}
