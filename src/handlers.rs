use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::{Fields, ServerError};

pub mod note;

/// Routes for the `/notes` resource.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route("", web::post().to(note::new))
            .route("", web::get().to(note::list))
            .route("/{id}", web::get().to(note::get))
            .route("/{id}", web::put().to(note::update))
            .route("/{id}", web::delete().to(note::del)),
    );
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServerError::UserError(vec![Fields::Body(err.to_string())]).into()
}
