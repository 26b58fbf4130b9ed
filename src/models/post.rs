use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{
    Author, CategoryRef, NewPost as DomainNewPost, Post as DomainPost, PostSummary,
};
use crate::domain::richtext::RichTextDocument;
use crate::domain::types::{
    AuthorName, AuthorRole, ImageUrl, PostExcerpt, PostTitle, ReadTimeMinutes, Slug,
    TypeConstraintError,
};

/// Diesel model representing the `posts` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::posts)]
pub struct Post {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub author_image_url: Option<String>,
    pub main_image_url: Option<String>,
    pub body: String,
    pub read_time_minutes: i32,
    pub published_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Post`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub author_image_url: Option<String>,
    pub main_image_url: Option<String>,
    pub body: String,
    pub read_time_minutes: i32,
    pub published_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable link between a post and a category, in editorial order.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::post_categories)]
pub struct NewPostCategory {
    pub post_id: i32,
    pub category_id: i32,
    pub position: i32,
}

impl Post {
    /// Converts the row into a listing summary using its pre-joined,
    /// position-ordered category references.
    pub fn into_summary(
        self,
        categories: Vec<CategoryRef>,
    ) -> Result<PostSummary, TypeConstraintError> {
        let author = self
            .author_name
            .map(|name| -> Result<Author, TypeConstraintError> {
                Ok(Author {
                    name: AuthorName::new(name)?,
                    role: self.author_role.map(AuthorRole::new).transpose()?,
                    image_url: self.author_image_url.map(ImageUrl::new).transpose()?,
                })
            })
            .transpose()?;

        Ok(PostSummary {
            id: self.id.try_into()?,
            slug: Slug::new(self.slug)?,
            title: PostTitle::new(self.title)?,
            excerpt: self.excerpt.map(PostExcerpt::new).transpose()?,
            author,
            categories,
            published_at: self.published_at,
            read_time: ReadTimeMinutes::new(self.read_time_minutes)?,
            main_image_url: self.main_image_url.map(ImageUrl::new).transpose()?,
        })
    }

    /// Converts the row into the full article, decoding the stored body.
    pub fn into_post(
        self,
        categories: Vec<CategoryRef>,
    ) -> Result<DomainPost, TypeConstraintError> {
        let body = RichTextDocument::from_json(&self.body)?;
        let summary = self.into_summary(categories)?;
        Ok(DomainPost { summary, body })
    }
}

impl NewPost {
    /// Builds the insertable row; the read-time estimate is derived by the
    /// repository from the decoded body before insert.
    pub fn from_domain(post: DomainNewPost, read_time: ReadTimeMinutes, now: NaiveDateTime) -> Self {
        let (author_name, author_role, author_image_url) = match post.author {
            Some(author) => (
                Some(author.name.into_inner()),
                author.role.map(AuthorRole::into_inner),
                author.image_url.map(ImageUrl::into_inner),
            ),
            None => (None, None, None),
        };

        Self {
            slug: post.slug.into_inner(),
            title: post.title.into_inner(),
            excerpt: post.excerpt.map(PostExcerpt::into_inner),
            author_name,
            author_role,
            author_image_url,
            main_image_url: post.main_image_url.map(ImageUrl::into_inner),
            body: post.body_json,
            read_time_minutes: read_time.get(),
            published_at: post.published_at,
            created_at: now,
            updated_at: now,
        }
    }
}
