use diesel::{pg::PgConnection, prelude::*, r2d2::ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::{NoteStore, StoreError};
use crate::{
    models::note::{InsertNote, NoteChanges, NoteRecord},
    schema::notes,
};

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Clone)]
pub struct PgNoteStore {
    pool: Pool,
}

impl PgNoteStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = r2d2::Pool::builder().build(manager)?;
        Ok(Self::new(pool))
    }

    pub fn run_migrations(&self) -> Result<(), StoreError> {
        let mut connection = self.pool.get()?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Query(e.to_string()))?;
        for version in applied {
            log::info!("applied migration {}", version);
        }
        Ok(())
    }
}

impl NoteStore for PgNoteStore {
    fn insert(&self, note: InsertNote) -> Result<NoteRecord, StoreError> {
        let mut connection = self.pool.get()?;
        let record = diesel::insert_into(notes::table)
            .values(&note)
            .get_result::<NoteRecord>(&mut connection)?;
        Ok(record)
    }

    fn find(&self, id: i64) -> Result<Option<NoteRecord>, StoreError> {
        let mut connection = self.pool.get()?;
        let record = notes::table
            .find(id)
            .first::<NoteRecord>(&mut connection)
            .optional()?;
        Ok(record)
    }

    fn list(&self) -> Result<Vec<NoteRecord>, StoreError> {
        let mut connection = self.pool.get()?;
        let records = notes::table
            .order(notes::id.asc())
            .load::<NoteRecord>(&mut connection)?;
        Ok(records)
    }

    fn update(&self, id: i64, changes: NoteChanges) -> Result<Option<NoteRecord>, StoreError> {
        let mut connection = self.pool.get()?;
        let record = diesel::update(notes::table.find(id))
            .set(&changes)
            .get_result::<NoteRecord>(&mut connection)
            .optional()?;
        Ok(record)
    }

    fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut connection = self.pool.get()?;
        let deleted = diesel::delete(notes::table.find(id)).execute(&mut connection)?;
        Ok(deleted > 0)
    }
}
