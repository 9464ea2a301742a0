use actix_web::{http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_derive::Serialize;
use serde_json::json;

use crate::{crypto::CodecError, store::StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonError {
    Missing,
    Empty,
    TooLong,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fields {
    Title(CommonError),
    Content(CommonError),
    Body(String),
}

#[derive(Debug, Display)]
pub enum ServerError {
    #[display(fmt = "unauthorized request")]
    Unauthorized,
    #[display(fmt = "note {} was not found", _0)]
    NotFound(i64),
    #[display(fmt = "invalid note fields")]
    UserError(Vec<Fields>),
    CodecError,
    StoreError,
    EnvironmentError,
    BlockingError,
}

impl From<CodecError> for ServerError {
    fn from(e: CodecError) -> ServerError {
        log::error!("{e}");
        ServerError::CodecError
    }
}

impl From<StoreError> for ServerError {
    fn from(e: StoreError) -> ServerError {
        log::error!("{e}");
        ServerError::StoreError
    }
}

impl From<actix_web::error::BlockingError> for ServerError {
    fn from(_: actix_web::error::BlockingError) -> ServerError {
        ServerError::BlockingError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::UserError(_) => StatusCode::BAD_REQUEST,
            ServerError::CodecError
            | ServerError::StoreError
            | ServerError::EnvironmentError
            | ServerError::BlockingError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::Unauthorized => {
                HttpResponse::Unauthorized().json(json!({ "error": "Unauthorized request" }))
            }
            ServerError::NotFound(id) => HttpResponse::NotFound()
                .json(json!({ "error": format!("Note not found with id: {}", id) })),
            ServerError::UserError(fields) => HttpResponse::BadRequest().json(json!({
                "error": "Invalid Request",
                "fields": fields,
            })),
            ServerError::CodecError => HttpResponse::InternalServerError()
                .json(json!({ "error": "Server Error: Failed to decrypt note content" })),
            ServerError::StoreError => HttpResponse::InternalServerError()
                .json(json!({ "error": "Server Error: Record store unavailable" })),
            ServerError::EnvironmentError => HttpResponse::InternalServerError()
                .json(json!({ "error": "Server Error: Service is misconfigured" })),
            ServerError::BlockingError => HttpResponse::InternalServerError()
                .json(json!({ "error": "Server Error: Worker pool failure" })),
        }
    }
}
