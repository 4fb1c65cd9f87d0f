use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Persistence seam for record collections.
///
/// A backend maps collection names to lists of records and knows nothing
/// about what the records mean. [`FsBackend`](super::FsBackend) writes one
/// JSON document per collection; [`MemBackend`](super::MemBackend) keeps
/// everything in memory for tests.
pub trait StorageBackend {
    /// Load every record in `collection`. A collection that was never
    /// written is empty, not an error.
    fn load_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>>;

    /// Replace the contents of `collection` with `records`.
    fn save_collection<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()>;
}
