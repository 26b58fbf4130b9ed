use std::io;

use actix_files::Files;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use yander_site::db::establish_connection_pool;
use yander_site::models::config::ServerConfig;
use yander_site::repository::DieselRepository;
use yander_site::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(io::Error::other)?
        .try_deserialize()
        .map_err(io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*.html").map_err(io::Error::other)?;

    let secret_key = Key::derive_from(config.secret_key.as_bytes());

    let bind_address = (config.bind_address.clone(), config.port);
    log::info!("Starting server on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .wrap(
                FlashMessagesFramework::builder(
                    CookieMessageStore::builder(secret_key.clone()).build(),
                )
                .build(),
            )
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(Logger::default())
            .service(routes::main::index)
            .service(routes::main::use_cases)
            .service(routes::main::use_case)
            .service(routes::main::set_consent)
            .service(routes::blog::show_blog)
            .service(routes::blog::show_post)
            .service(routes::changelog::show_changelog)
            .service(routes::integrations::show_integrations)
            .service(routes::contact::show_contact)
            .service(routes::contact::submit_contact)
            .service(Files::new("/assets", "assets"))
    })
    .bind(bind_address)?
    .run()
    .await
}
