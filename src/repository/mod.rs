use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::changelog::{ChangelogEntry, NewChangelogEntry};
use crate::domain::contact::NewContactRequest;
use crate::domain::integration::{Integration, NewIntegration};
use crate::domain::post::{NewPost, Post, PostSummary};
use crate::domain::types::{CategoryId, EntryId, IntegrationId, PostId, Slug};
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod changelog;
pub mod contact;
pub mod errors;
pub mod integration;
pub mod post;

/// Content-store implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing blog posts.
///
/// Free-text search is deliberately absent: the search refinement is applied
/// by the blog service to the page already fetched, never pushed down to the
/// store.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    /// Restrict to posts linked to this category slug.
    pub category: Option<Slug>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl PostListQuery {
    pub fn category(mut self, category: Slug) -> Self {
        self.category = Some(category);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters for listing changelog entries.
#[derive(Debug, Clone, Default)]
pub struct ChangelogListQuery {
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl ChangelogListQuery {
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters for listing the integrations directory.
#[derive(Debug, Clone, Default)]
pub struct IntegrationListQuery {
    /// Restrict to one directory category label.
    pub category: Option<String>,
}

impl IntegrationListQuery {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Read-only operations for blog posts.
pub trait PostReader {
    /// List post summaries matching the supplied query parameters, newest
    /// first, returning the unpaginated total alongside the page items.
    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<PostSummary>)>;
    /// Retrieve a full post by its slug.
    fn get_post_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Post>>;
}

/// Write operations for blog posts.
pub trait PostWriter {
    /// Persist a new post with its ordered category links.
    fn create_post(&self, post: &NewPost) -> RepositoryResult<PostId>;
}

/// Read-only operations for blog categories.
pub trait CategoryReader {
    /// List all categories ordered by title.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its slug.
    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>>;
}

/// Write operations for blog categories.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<CategoryId>;
}

/// Read-only operations for changelog entries.
pub trait ChangelogReader {
    /// List entries matching the supplied query parameters, newest first,
    /// returning the unpaginated total alongside the page items.
    fn list_entries(
        &self,
        query: ChangelogListQuery,
    ) -> RepositoryResult<(usize, Vec<ChangelogEntry>)>;
}

/// Write operations for changelog entries.
pub trait ChangelogWriter {
    /// Persist a new changelog entry.
    fn create_entry(&self, entry: &NewChangelogEntry) -> RepositoryResult<EntryId>;
}

/// Read-only operations for the integrations directory.
pub trait IntegrationReader {
    /// List integrations matching the supplied query, ordered by name.
    fn list_integrations(&self, query: IntegrationListQuery) -> RepositoryResult<Vec<Integration>>;
}

/// Write operations for the integrations directory.
pub trait IntegrationWriter {
    /// Persist a new integration.
    fn create_integration(&self, integration: &NewIntegration) -> RepositoryResult<IntegrationId>;
}

/// Write operations for contact-sales requests.
pub trait ContactWriter {
    /// Persist a contact request, returning the number of inserted rows.
    fn create_contact_request(&self, request: &NewContactRequest) -> RepositoryResult<usize>;
}
