use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::changelog::{
    ChangelogEntry as DomainEntry, NewChangelogEntry as DomainNewEntry,
};
use crate::domain::richtext::RichTextDocument;
use crate::domain::types::{EntryTag, EntryTitle, Slug, TypeConstraintError};

/// Diesel model representing the `changelog_entries` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::changelog_entries)]
pub struct ChangelogEntry {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub tag: Option<String>,
    pub body: String,
    pub published_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`ChangelogEntry`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::changelog_entries)]
pub struct NewChangelogEntry {
    pub slug: String,
    pub title: String,
    pub tag: Option<String>,
    pub body: String,
    pub published_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ChangelogEntry> for DomainEntry {
    type Error = TypeConstraintError;

    fn try_from(entry: ChangelogEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entry.id.try_into()?,
            slug: Slug::new(entry.slug)?,
            title: EntryTitle::new(entry.title)?,
            tag: entry.tag.map(EntryTag::new).transpose()?,
            published_at: entry.published_at,
            body: RichTextDocument::from_json(&entry.body)?,
        })
    }
}

impl NewChangelogEntry {
    pub fn from_domain(entry: DomainNewEntry, now: NaiveDateTime) -> Self {
        Self {
            slug: entry.slug.into_inner(),
            title: entry.title.into_inner(),
            tag: entry.tag.map(EntryTag::into_inner),
            body: entry.body_json,
            published_at: entry.published_at,
            created_at: now,
            updated_at: now,
        }
    }
}
