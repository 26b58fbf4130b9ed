use crate::domain::category::Category;
use crate::domain::post::PostSummary;
use crate::domain::toc::{HeadingEntry, extract_headings};
use crate::domain::types::Slug;
use crate::dto::pagination::PaginationDto;
use crate::dto::posts::PostCardDto;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::render::render_document;
use crate::repository::{CategoryReader, PostListQuery, PostReader};

use super::{ServiceError, ServiceResult};

/// Everything the blog index template needs for one request.
#[derive(Debug)]
pub struct BlogIndexPage {
    pub categories: Vec<Category>,
    pub posts: Vec<PostCardDto>,
    /// Hidden while a search query is active; search and pagination are
    /// mutually exclusive presentation modes.
    pub pagination: Option<PaginationDto>,
    pub active_category: Option<Slug>,
    pub query: Option<String>,
}

/// A rendered article with its outline.
#[derive(Debug)]
pub struct ArticlePage {
    pub post: PostCardDto,
    pub body_html: String,
    pub headings: Vec<HeadingEntry>,
}

/// Refines an already-fetched page of summaries by a free-text query.
///
/// Case-insensitive substring match against title, excerpt, author name and
/// category titles. Pure and order-preserving; an empty or whitespace-only
/// query returns the input unchanged. This never goes back to the store, so
/// it only ever sees the current page of results.
pub fn filter_posts(posts: &[PostSummary], query: &str) -> Vec<PostSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|post| {
            post.title.as_str().to_lowercase().contains(&needle)
                || post
                    .excerpt
                    .as_ref()
                    .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
                || post
                    .author
                    .as_ref()
                    .is_some_and(|a| a.name.as_str().to_lowercase().contains(&needle))
                || post
                    .categories
                    .iter()
                    .any(|c| c.title.as_str().to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Core business logic for rendering the blog index.
///
/// Fetches the category set and the requested page of summaries (re-queried
/// on every category/page navigation), then applies the free-text refinement
/// to the fetched page. Repository errors are converted into `ServiceError`
/// variants so that the HTTP route can remain a thin wrapper.
pub fn show_blog_index<R>(
    page: usize,
    category: Option<Slug>,
    query: Option<String>,
    repo: &R,
) -> ServiceResult<BlogIndexPage>
where
    R: PostReader + CategoryReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if let Some(category) = &category {
        match repo.get_category_by_slug(category) {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ServiceError::NotFound),
            Err(e) => {
                log::error!("Failed to get category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    let mut list_query = PostListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(category) = category.clone() {
        list_query = list_query.category(category);
    }

    let paginated = match repo.list_posts(list_query) {
        Ok((total, posts)) => {
            Paginated::new(posts, page, total.div_ceil(DEFAULT_ITEMS_PER_PAGE))
        }
        Err(e) => {
            log::error!("Failed to list posts: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let query = query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    let (posts, pagination) = match &query {
        Some(q) => {
            let filtered = filter_posts(&paginated.items, q);
            (filtered, None)
        }
        None => {
            let pagination = (paginated.total_pages > 1).then(|| {
                PaginationDto::new(&paginated, "/blog", category.as_ref().map(Slug::as_str))
            });
            (paginated.items, pagination)
        }
    };

    Ok(BlogIndexPage {
        categories,
        posts: posts.into_iter().map(PostCardDto::from).collect(),
        pagination,
        active_category: category,
        query,
    })
}

/// Core business logic for rendering one article page.
///
/// The body is rendered once per request and the outline is re-extracted
/// from the same document, so heading anchors and outline ids always agree.
pub fn show_post<R>(slug: &Slug, repo: &R) -> ServiceResult<ArticlePage>
where
    R: PostReader,
{
    let post = match repo.get_post_by_slug(slug) {
        Ok(Some(post)) => post,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get post: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let body_html = render_document(&post.body);
    let headings = extract_headings(&post.body);

    Ok(ArticlePage {
        post: PostCardDto::from(post.summary),
        body_html,
        headings,
    })
}
