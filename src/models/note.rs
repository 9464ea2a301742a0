use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};

use crate::schema::notes;

/// A row as held by the record store. `content` is always ciphertext.
#[derive(Clone, Debug, Queryable)]
pub struct NoteRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = notes)]
pub struct InsertNote {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, AsChangeset)]
#[diesel(table_name = notes)]
pub struct NoteChanges {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// A note as returned to callers. `content` is always plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for create and update, before validation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NoteForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Fields that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}
