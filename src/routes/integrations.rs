use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::ServiceError;
use crate::services::integrations::show_integrations as show_integrations_service;

#[derive(Deserialize)]
struct IntegrationsQueryParams {
    category: Option<String>,
}

#[get("/integrations")]
pub async fn show_integrations(
    params: web::Query<IntegrationsQueryParams>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &session, "integrations");

    match show_integrations_service(params.into_inner().category, repo.get_ref()) {
        Ok(directory) => {
            let mut context = context;
            context.insert("groups", &directory.groups);
            context.insert("categories", &directory.categories);
            context.insert("active_category", &directory.active_category);
            render_template(&tera, "integrations/index.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, &context),
        Err(err) => {
            log::error!("Failed to render integrations directory: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
