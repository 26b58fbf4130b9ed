use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::richtext::RichTextDocument;
use crate::domain::types::{EntryId, EntryTag, EntryTitle, Slug};

/// One dated release note on the changelog page.
#[derive(Debug, Clone)]
pub struct ChangelogEntry {
    pub id: EntryId,
    pub slug: Slug,
    pub title: EntryTitle,
    pub tag: Option<EntryTag>,
    pub published_at: NaiveDateTime,
    pub body: RichTextDocument,
}

/// Data required to insert a new [`ChangelogEntry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewChangelogEntry {
    pub slug: Slug,
    pub title: EntryTitle,
    pub tag: Option<EntryTag>,
    pub published_at: NaiveDateTime,
    pub body_json: String,
}
