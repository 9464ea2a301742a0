use crate::{
    errors::{CommonError, Fields, ServerError},
    models::note::{NoteForm, NoteInput},
};

pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MAX_CHARS: usize = 1000;

/// Checks a create/update body. Every failing field is reported at once.
pub fn validate_note(form: NoteForm) -> Result<NoteInput, ServerError> {
    let mut errors = vec![];

    match &form.title {
        None => errors.push(Fields::Title(CommonError::Missing)),
        Some(t) if t.trim().is_empty() => errors.push(Fields::Title(CommonError::Empty)),
        Some(t) if t.chars().count() > TITLE_MAX_CHARS => {
            errors.push(Fields::Title(CommonError::TooLong))
        }
        Some(_) => {}
    }

    match &form.content {
        None => errors.push(Fields::Content(CommonError::Missing)),
        Some(c) if c.chars().count() > CONTENT_MAX_CHARS => {
            errors.push(Fields::Content(CommonError::TooLong))
        }
        Some(_) => {}
    }

    match (form.title, form.content) {
        (Some(title), Some(content)) if errors.is_empty() => Ok(NoteInput { title, content }),
        _ => Err(ServerError::UserError(errors)),
    }
}
