//! Note lifecycle: create, read, update and delete, with content passed
//! through the cipher on its way to and from the store.
//!
//! Callers are expected to have authorized the request and validated the
//! fields before reaching this layer.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    crypto::NoteCipher,
    errors::ServerError,
    models::note::{InsertNote, Note, NoteChanges, NoteInput, NoteRecord},
    store::NoteStore,
};

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
    cipher: NoteCipher,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>, cipher: NoteCipher) -> Self {
        Self { store, cipher }
    }

    /// Opens a stored record. Fails as a whole if the content cannot be
    /// opened; no partial note is ever produced.
    fn to_note(&self, record: NoteRecord) -> Result<Note, ServerError> {
        let content = self.cipher.open(&record.content).map_err(|e| {
            log::error!("note {}: {}", record.id, e);
            ServerError::CodecError
        })?;

        Ok(Note {
            id: record.id,
            title: record.title,
            content,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn create(&self, input: NoteInput) -> Result<Note, ServerError> {
        let sealed = self.cipher.seal(&input.content)?;
        let time_now = Utc::now();

        let record = self.store.insert(InsertNote {
            title: input.title,
            content: sealed,
            created_at: time_now,
            updated_at: time_now,
        })?;
        log::info!("created note {}", record.id);

        Ok(Note {
            id: record.id,
            title: record.title,
            content: input.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn get(&self, id: i64) -> Result<Note, ServerError> {
        match self.store.find(id)? {
            Some(record) => self.to_note(record),
            None => Err(ServerError::NotFound(id)),
        }
    }

    pub fn list(&self) -> Result<Vec<Note>, ServerError> {
        self.store
            .list()?
            .into_iter()
            .map(|record| self.to_note(record))
            .collect()
    }

    pub fn update(&self, id: i64, input: NoteInput) -> Result<Note, ServerError> {
        let existing = self.store.find(id)?.ok_or(ServerError::NotFound(id))?;
        let sealed = self.cipher.seal(&input.content)?;

        let record = self
            .store
            .update(
                id,
                NoteChanges {
                    title: input.title,
                    content: sealed,
                    updated_at: next_update_time(existing.updated_at, Utc::now()),
                },
            )?
            // deleted between the lookup and the write
            .ok_or(ServerError::NotFound(id))?;
        log::info!("updated note {}", id);

        Ok(Note {
            id: record.id,
            title: record.title,
            content: input.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn delete(&self, id: i64) -> Result<(), ServerError> {
        if !self.store.delete(id)? {
            return Err(ServerError::NotFound(id));
        }
        log::info!("deleted note {}", id);
        Ok(())
    }
}

/// Keeps `updated_at` strictly increasing even when the clock has not moved
/// past the stored value at the store's microsecond precision.
fn next_update_time(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + Duration::microseconds(1);
    if now < floor {
        floor
    } else {
        now
    }
}
