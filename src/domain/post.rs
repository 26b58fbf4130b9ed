use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::richtext::RichTextDocument;
use crate::domain::types::{
    AuthorName, AuthorRole, CategoryId, CategoryTitle, ImageUrl, PostExcerpt, PostId, PostTitle,
    ReadTimeMinutes, Slug,
};

/// Post author shown on cards and article pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub name: AuthorName,
    pub role: Option<AuthorRole>,
    pub image_url: Option<ImageUrl>,
}

/// Category reference carried by a post summary, in editorial order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub title: CategoryTitle,
    pub slug: Slug,
}

/// Listing card for a blog post; immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub slug: Slug,
    pub title: PostTitle,
    pub excerpt: Option<PostExcerpt>,
    pub author: Option<Author>,
    pub categories: Vec<CategoryRef>,
    pub published_at: NaiveDateTime,
    pub read_time: ReadTimeMinutes,
    pub main_image_url: Option<ImageUrl>,
}

/// Full article: the listing summary plus the rich-text body.
#[derive(Debug, Clone)]
pub struct Post {
    pub summary: PostSummary,
    pub body: RichTextDocument,
}

/// Information required to publish a new [`Post`].
///
/// The body travels as the raw JSON block sequence; the repository decodes it
/// once on insert to validate it and derive the read-time estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub slug: Slug,
    pub title: PostTitle,
    pub excerpt: Option<PostExcerpt>,
    pub author: Option<Author>,
    /// Category links in the order they should appear on the card.
    pub category_ids: Vec<CategoryId>,
    pub published_at: NaiveDateTime,
    pub main_image_url: Option<ImageUrl>,
    pub body_json: String,
}
