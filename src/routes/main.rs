use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::consent::{self, ConsentStatus};
use crate::repository::DieselRepository;
use crate::routes::{base_context, not_found, redirect, render_template};
use crate::services::ServiceError;
use crate::services::main::{
    show_home as show_home_service, show_use_case as show_use_case_service,
    show_use_cases as show_use_cases_service,
};

#[get("/")]
pub async fn index(
    session: Session,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_home_service(repo.get_ref()) {
        Ok(posts) => {
            let mut context = base_context(&flash_messages, &session, "home");
            context.insert("recent_posts", &posts);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/use-cases")]
pub async fn use_cases(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &session, "use-cases");
    context.insert("use_cases", &show_use_cases_service());
    render_template(&tera, "main/use_cases.html", &context)
}

#[get("/use-cases/{slug}")]
pub async fn use_case(
    slug: web::Path<String>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &session, "use-cases");
    match show_use_case_service(&slug.into_inner()) {
        Ok(use_case) => {
            context.insert("use_case", &use_case);
            render_template(&tera, "main/use_case.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, &context),
        Err(err) => {
            log::error!("Failed to render use case: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
pub struct ConsentForm {
    decision: String,
}

#[post("/consent")]
pub async fn set_consent(
    request: HttpRequest,
    session: Session,
    web::Form(form): web::Form<ConsentForm>,
) -> impl Responder {
    let redirect_to = request
        .headers()
        .get("referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");

    let status = match ConsentStatus::try_from(form.decision.as_str()) {
        Ok(status) => status,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect(redirect_to);
        }
    };

    if let Err(e) = consent::record(&session, status) {
        log::error!("Failed to store consent decision: {e}");
    }

    redirect(redirect_to)
}
