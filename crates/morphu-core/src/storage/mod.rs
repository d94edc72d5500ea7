//! Key-value storage abstraction for persistence.
//!
//! The board persists as JSON blobs under fixed string keys, so the
//! storage surface is a plain key-value store rather than a document
//! database. Backends exist for memory (tests, ephemeral boards) and
//! the filesystem.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for key-value storage backends.
///
/// Values are opaque strings; callers decide the encoding (the board
/// store uses JSON). A missing key reads as `None`, never an error.
pub trait Storage: Send + Sync {
    /// Read the value for a key.
    fn get(&self, key: &str) -> BoxFuture<'_, StorageResult<Option<String>>>;

    /// Write the value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// Check if a key is present.
    fn contains(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;

    /// List all stored keys.
    fn keys(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;
}
