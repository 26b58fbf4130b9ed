use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryTitle, NonEmptyString, Slug};

/// Canonical blog category used as a filter key and display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: CategoryTitle,
    pub slug: Slug,
    pub description: Option<NonEmptyString>,
    pub color: Option<NonEmptyString>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub title: CategoryTitle,
    pub slug: Slug,
    pub description: Option<NonEmptyString>,
    pub color: Option<NonEmptyString>,
}
