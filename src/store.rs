use derive_more::Display;

use crate::models::note::{InsertNote, NoteChanges, NoteRecord};

#[cfg(test)]
pub mod memory;
pub mod pg;

pub use pg::PgNoteStore;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "pooling error: {}", _0)]
    Pool(String),
    #[display(fmt = "diesel error: {}", _0)]
    Query(String),
}

impl From<r2d2::Error> for StoreError {
    fn from(e: r2d2::Error) -> StoreError {
        StoreError::Pool(e.to_string())
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> StoreError {
        StoreError::Query(e.to_string())
    }
}

/// Durable storage for note records. Implementations own identity
/// assignment and whatever concurrency control they provide; callers treat
/// their answer as authoritative.
pub trait NoteStore: Send + Sync {
    fn insert(&self, note: InsertNote) -> Result<NoteRecord, StoreError>;

    fn find(&self, id: i64) -> Result<Option<NoteRecord>, StoreError>;

    fn list(&self) -> Result<Vec<NoteRecord>, StoreError>;

    /// `None` when no record has this id.
    fn update(&self, id: i64, changes: NoteChanges) -> Result<Option<NoteRecord>, StoreError>;

    /// `false` when no record has this id.
    fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
