use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::post::{CategoryRef, NewPost, Post, PostSummary};
use crate::domain::richtext::RichTextDocument;
use crate::domain::types::{CategoryTitle, PostId, Slug};
use crate::models::post::{NewPost as DbNewPost, NewPostCategory, Post as DbPost};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PostListQuery, PostReader, PostWriter};

impl DieselRepository {
    /// Loads position-ordered category references for a set of posts.
    fn category_refs(
        &self,
        conn: &mut crate::db::DbConnection,
        post_ids: &[i32],
    ) -> RepositoryResult<HashMap<i32, Vec<CategoryRef>>> {
        use crate::schema::{categories, post_categories};

        let rows: Vec<(i32, String, String)> = post_categories::table
            .inner_join(categories::table)
            .filter(post_categories::post_id.eq_any(post_ids))
            .order((post_categories::post_id.asc(), post_categories::position.asc()))
            .select((post_categories::post_id, categories::title, categories::slug))
            .load(conn)?;

        let mut refs: HashMap<i32, Vec<CategoryRef>> = HashMap::new();
        for (post_id, title, slug) in rows {
            refs.entry(post_id).or_default().push(CategoryRef {
                title: CategoryTitle::new(title)?,
                slug: Slug::new(slug)?,
            });
        }
        Ok(refs)
    }
}

impl PostReader for DieselRepository {
    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<PostSummary>)> {
        use crate::schema::{categories, post_categories, posts};

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = posts::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(category) = &query.category {
                items = items.filter(
                    posts::id.eq_any(
                        post_categories::table
                            .filter(
                                post_categories::category_id.eq_any(
                                    categories::table
                                        .filter(categories::slug.eq(category.as_str()))
                                        .select(categories::id),
                                ),
                            )
                            .select(post_categories::post_id),
                    ),
                );
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items
            .order((posts::published_at.desc(), posts::id.desc()))
            .load::<DbPost>(&mut conn)?;

        let post_ids: Vec<i32> = rows.iter().map(|p| p.id).collect();
        let mut refs = self.category_refs(&mut conn, &post_ids)?;

        let items = rows
            .into_iter()
            .map(|row| {
                let categories = refs.remove(&row.id).unwrap_or_default();
                row.into_summary(categories)
            })
            .collect::<Result<Vec<PostSummary>, _>>()?;

        Ok((total, items))
    }

    fn get_post_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let row = posts::table
            .filter(posts::slug.eq(slug.as_str()))
            .first::<DbPost>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut refs = self.category_refs(&mut conn, &[row.id])?;
        let categories = refs.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_post(categories)?))
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, post: &NewPost) -> RepositoryResult<PostId> {
        use crate::schema::{post_categories, posts};

        // Decode once up front: validates the body and feeds the read-time
        // estimate stored on the row.
        let document = RichTextDocument::from_json(&post.body_json)?;
        let read_time = document.estimate_read_time();

        let now = Utc::now().naive_utc();
        let db_post = DbNewPost::from_domain(post.clone(), read_time, now);

        let mut conn = self.conn()?;

        let post_id = conn.transaction::<_, RepositoryError, _>(|conn| {
            let post_id: i32 = diesel::insert_into(posts::table)
                .values(&db_post)
                .returning(posts::id)
                .get_result(conn)?;

            let links: Vec<NewPostCategory> = post
                .category_ids
                .iter()
                .enumerate()
                .map(|(position, category_id)| NewPostCategory {
                    post_id,
                    category_id: category_id.get(),
                    position: position as i32,
                })
                .collect();

            if !links.is_empty() {
                diesel::insert_into(post_categories::table)
                    .values(&links)
                    .execute(conn)?;
            }

            Ok(post_id)
        })?;

        Ok(PostId::new(post_id)?)
    }
}
