use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BoardError, Result};
use crate::store::StorageBackend;

/// In-memory backend for tests. Clones share the same collections, so two
/// typed stores handed clones of one backend see each other's writes, just
/// like two stores over the same directory. Deliberately not `Send`.
#[derive(Debug, Clone, Default)]
pub struct MemBackend {
    collections: Rc<RefCell<HashMap<String, Vec<Value>>>>,
    simulate_write_error: Rc<RefCell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail, for exercising error paths.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let collections = self.collections.borrow();
        match collections.get(collection) {
            Some(records) => records
                .iter()
                .map(|value| serde_json::from_value(value.clone()).map_err(BoardError::from))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    fn save_collection<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(BoardError::Store("Simulated write error".to_string()));
        }

        let values = records
            .iter()
            .map(|record| serde_json::to_value(record).map_err(BoardError::from))
            .collect::<Result<Vec<_>>>()?;
        self.collections
            .borrow_mut()
            .insert(collection.to_string(), values);
        Ok(())
    }
}
