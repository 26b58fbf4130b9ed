use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::contact::{ContactForm, ContactFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::contact::submit_contact_request as submit_contact_request_service;

#[get("/contact-sales")]
pub async fn show_contact(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &session, "contact-sales");
    render_template(&tera, "contact/index.html", &context)
}

#[post("/contact-sales")]
pub async fn submit_contact(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    let payload: ContactFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/contact-sales");
        }
    };

    match submit_contact_request_service(payload, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Thanks! Our sales team will be in touch.").send(),
        Ok(false) => {
            FlashMessage::error("Something went wrong. Please try again.").send()
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to submit contact request: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/contact-sales")
}
