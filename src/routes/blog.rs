use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::domain::types::Slug;
use crate::repository::DieselRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::ServiceError;
use crate::services::blog::{
    show_blog_index as show_blog_index_service, show_post as show_post_service,
};

#[derive(Deserialize)]
struct BlogQueryParams {
    page: Option<usize>,
    category: Option<String>,
    q: Option<String>,
}

#[get("/blog")]
pub async fn show_blog(
    params: web::Query<BlogQueryParams>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let page = params.page.unwrap_or(1);
    let context = base_context(&flash_messages, &session, "blog");

    // A category that is not even a slug cannot match anything in the store.
    let category = match params.category.map(Slug::new).transpose() {
        Ok(category) => category,
        Err(_) => return not_found(&tera, &context),
    };

    match show_blog_index_service(page, category, params.q, repo.get_ref()) {
        Ok(index) => {
            let mut context = context;
            context.insert("categories", &index.categories);
            context.insert("posts", &index.posts);
            context.insert("pagination", &index.pagination);
            context.insert("active_category", &index.active_category);
            context.insert("query", &index.query);
            render_template(&tera, "blog/index.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, &context),
        Err(err) => {
            log::error!("Failed to render blog index: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/blog/{slug}")]
pub async fn show_post(
    slug: web::Path<String>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &session, "blog");

    let slug = match Slug::new(slug.into_inner()) {
        Ok(slug) => slug,
        Err(_) => return not_found(&tera, &context),
    };

    match show_post_service(&slug, repo.get_ref()) {
        Ok(article) => {
            let mut context = context;
            context.insert("post", &article.post);
            context.insert("body_html", &article.body_html);
            context.insert("headings", &article.headings);
            render_template(&tera, "blog/post.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, &context),
        Err(err) => {
            log::error!("Failed to render blog post: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
