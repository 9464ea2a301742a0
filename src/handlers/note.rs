use actix_web::{web, HttpResponse};

use crate::{
    auth::Authorized,
    errors::ServerError,
    models::note::NoteForm,
    service::NoteService,
    validation::validate_note,
};

// `Authorized` is always the first extractor so a bad credential is rejected
// before the path or body is parsed.

pub async fn new(
    _: Authorized,
    input: web::Json<NoteForm>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let input = validate_note(input.into_inner())?;
    let note = web::block(move || service.create(input)).await??;
    Ok(HttpResponse::Created().json(note))
}

pub async fn list(
    _: Authorized,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let notes = web::block(move || service.list()).await??;
    Ok(HttpResponse::Ok().json(notes))
}

pub async fn get(
    _: Authorized,
    note_id: web::Path<i64>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();
    let note = web::block(move || service.get(note_id)).await??;
    Ok(HttpResponse::Ok().json(note))
}

pub async fn update(
    _: Authorized,
    note_id: web::Path<i64>,
    input: web::Json<NoteForm>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();
    let input = validate_note(input.into_inner())?;
    let note = web::block(move || service.update(note_id, input)).await??;
    Ok(HttpResponse::Ok().json(note))
}

pub async fn del(
    _: Authorized,
    note_id: web::Path<i64>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();
    web::block(move || service.delete(note_id)).await??;
    Ok(HttpResponse::Ok().finish())
}
