use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

mod auth;
mod config;
mod crypto;
mod errors;
mod handlers;
mod models;
mod schema;
mod service;
mod store;
mod utils;
mod validation;

use auth::AccessGate;
use config::Config;
use crypto::NoteCipher;
use service::NoteService;
use store::PgNoteStore;

fn startup_error(e: impl std::fmt::Display) -> io::Error {
    log::error!("startup failed: {e}");
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(startup_error)?;
    let cipher = NoteCipher::new(&config.encryption_key).map_err(startup_error)?;
    let gate = web::Data::new(AccessGate::new(config.app_token.clone()));

    let store = PgNoteStore::connect(&config.database_url).map_err(startup_error)?;
    store.run_migrations().map_err(startup_error)?;
    let notes = web::Data::new(NoteService::new(Arc::new(store), cipher));

    log::info!("listening on 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(gate.clone())
            .app_data(notes.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
