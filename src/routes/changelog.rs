use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::changelog::show_changelog as show_changelog_service;

#[derive(Deserialize)]
struct ChangelogQueryParams {
    page: Option<usize>,
}

#[get("/changelog")]
pub async fn show_changelog(
    params: web::Query<ChangelogQueryParams>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);

    match show_changelog_service(page, repo.get_ref()) {
        Ok(changelog) => {
            let mut context = base_context(&flash_messages, &session, "changelog");
            context.insert("entries", &changelog.entries);
            context.insert("pagination", &changelog.pagination);
            render_template(&tera, "changelog/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render changelog: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
