//! Object storage over a bucket, addressed by directory and key.
//!
//! Only the interface lives here, plus an in-memory implementation. A remote
//! client implements [`ObjectStore`] in the application.

mod config;
pub use config::StoreConfig;

mod memory;
pub use memory::MemoryStore;

use sift_core::Result;

use async_trait::async_trait;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads the object at `<directory>/<key>`. Fails with a record not
    /// found error when there is none.
    async fn get(&self, directory: &str, key: &str) -> Result<Vec<u8>>;

    /// Writes the object unless one already exists at the same key. Returns
    /// `false`, leaving the existing object untouched, in that case.
    async fn put(&self, directory: &str, key: &str, data: Vec<u8>) -> Result<bool>;

    /// Removes the object. Returns `false` when there was none.
    async fn delete(&self, directory: &str, key: &str) -> Result<bool>;
}

/// The bucket key of an object.
pub fn object_key(directory: &str, key: &str) -> String {
    format!("{directory}/{key}")
}
