use actix_session::Session;
use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::consent::{self, ConsentStatus};

pub mod blog;
pub mod changelog;
pub mod contact;
pub mod integrations;
pub mod main;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

pub fn not_found(tera: &Tera, context: &Context) -> HttpResponse {
    HttpResponse::NotFound().body(
        tera.render("main/not_found.html", context).unwrap_or_else(|e| {
            log::error!("Failed to render template 'main/not_found.html': {e}");
            String::new()
        }),
    )
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    session: &Session,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let consent = consent::current(session);

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("consent", consent.as_str());
    context.insert("show_consent_banner", &(consent == ConsentStatus::Unset));
    context
}
