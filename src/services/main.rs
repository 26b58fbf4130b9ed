use crate::domain::usecase::{self, UseCase};
use crate::dto::posts::PostCardDto;
use crate::repository::{PostListQuery, PostReader};

use super::{ServiceError, ServiceResult};

/// Number of recent posts featured on the home page.
const HOME_RECENT_POSTS: usize = 3;

/// Core business logic for rendering the home page: the most recent posts,
/// unfiltered.
pub fn show_home<R>(repo: &R) -> ServiceResult<Vec<PostCardDto>>
where
    R: PostReader,
{
    match repo.list_posts(PostListQuery::default().paginate(1, HOME_RECENT_POSTS)) {
        Ok((_total, posts)) => Ok(posts.into_iter().map(PostCardDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list recent posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The use-cases directory, in display order.
pub fn show_use_cases() -> Vec<UseCase> {
    usecase::directory()
}

/// A single use-case page.
pub fn show_use_case(slug: &str) -> ServiceResult<UseCase> {
    usecase::find(slug).ok_or(ServiceError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{Post, PostSummary};
    use crate::domain::richtext::RichTextDocument;
    use crate::domain::types::{PostId, PostTitle, ReadTimeMinutes, Slug};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_post(id: i32, slug: &str) -> Post {
        Post {
            summary: PostSummary {
                id: PostId::new(id).unwrap(),
                slug: Slug::new(slug).unwrap(),
                title: PostTitle::new("Post").unwrap(),
                excerpt: None,
                author: None,
                categories: vec![],
                published_at: DateTime::from_timestamp(id as i64, 0).unwrap().naive_utc(),
                read_time: ReadTimeMinutes::new(1).unwrap(),
                main_image_url: None,
            },
            body: RichTextDocument::default(),
        }
    }

    #[test]
    fn home_caps_recent_posts_and_orders_newest_first() {
        let repo = TestRepository::new(vec![
            sample_post(1, "one"),
            sample_post(2, "two"),
            sample_post(3, "three"),
            sample_post(4, "four"),
        ]);

        let posts = show_home(&repo).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].slug, "four");
    }

    #[test]
    fn use_case_lookup_distinguishes_known_and_unknown() {
        assert!(show_use_case("product-teams").is_ok());
        assert!(matches!(
            show_use_case("unknown"),
            Err(ServiceError::NotFound)
        ));
    }
}
