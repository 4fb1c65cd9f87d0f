//! # Record Persistence
//!
//! Storage is split in two: a [`StorageBackend`] knows HOW collections are
//! persisted (filesystem document, in-memory map), a [`RecordStore`] knows
//! WHAT lives in one collection and exposes typed list/get/add/remove over
//! it. One generic store serves both notes and tasks; the collection name
//! is the only thing that differs.
//!
//! Every mutation rewrites the whole collection. The documents are small
//! (a personal board, not a database) and whole-document writes keep the
//! backend trivially atomic. Single-writer: nothing here guards against a
//! second process mutating the same directory.

mod backend;
mod fs_backend;
mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;

/// Collection name for notes.
pub const NOTES: &str = "notes";
/// Collection name for tasks.
pub const TASKS: &str = "tasks";

/// Anything a [`RecordStore`] can hold.
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> Uuid;
}

/// Typed view over one backend collection.
pub struct RecordStore<B: StorageBackend, T: Record> {
    backend: B,
    collection: &'static str,
    _record: PhantomData<T>,
}

impl<B: StorageBackend, T: Record> RecordStore<B, T> {
    pub fn new(backend: B, collection: &'static str) -> Self {
        Self {
            backend,
            collection,
            _record: PhantomData,
        }
    }

    pub fn list(&self) -> Result<Vec<T>> {
        self.backend.load_collection(self.collection)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<T>> {
        Ok(self.list()?.into_iter().find(|record| record.id() == id))
    }

    pub fn add(&self, record: &T) -> Result<()> {
        let mut records = self.list()?;
        records.push(record.clone());
        self.backend.save_collection(self.collection, &records)?;
        log::debug!("added record {} to {}", record.id(), self.collection);
        Ok(())
    }

    /// Remove by id. Returns whether anything was removed; the collection
    /// is only rewritten when it was.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.backend.save_collection(self.collection, &records)?;
        log::debug!("removed record {} from {}", id, self.collection);
        Ok(true)
    }
}
