use std::{collections::BTreeMap, sync::Mutex};

use super::{NoteStore, StoreError};
use crate::models::note::{InsertNote, NoteChanges, NoteRecord};

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, NoteRecord>,
}

/// In-process store for tests.
#[derive(Default)]
pub struct MemoryNoteStore {
    inner: Mutex<Inner>,
}

impl MemoryNoteStore {
    /// Overwrites the stored content column directly, bypassing the cipher.
    pub fn overwrite_content(&self, id: i64, content: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(record) = inner.records.get_mut(&id) {
            record.content = content.to_owned();
        }
    }

    pub fn raw(&self, id: i64) -> Option<NoteRecord> {
        self.inner.lock().unwrap().records.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().records.is_empty()
    }
}

impl NoteStore for MemoryNoteStore {
    fn insert(&self, note: InsertNote) -> Result<NoteRecord, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let record = NoteRecord {
            id: inner.next_id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        };
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn find(&self, id: i64) -> Result<Option<NoteRecord>, StoreError> {
        Ok(self.raw(id))
    }

    fn list(&self) -> Result<Vec<NoteRecord>, StoreError> {
        Ok(self.inner.lock().unwrap().records.values().cloned().collect())
    }

    fn update(&self, id: i64, changes: NoteChanges) -> Result<Option<NoteRecord>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.records.get_mut(&id).map(|record| {
            record.title = changes.title;
            record.content = changes.content;
            record.updated_at = changes.updated_at;
            record.clone()
        }))
    }

    fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().records.remove(&id).is_some())
    }
}
