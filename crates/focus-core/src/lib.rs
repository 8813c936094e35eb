//! # Focus Core
//!
//! Foundational utilities shared by the Focus dashboard client crates:
//!
//! - [`storage`]: Durable key-value storage used to persist session state
//! - [`serde`]: Custom serde serialization/deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use focus_core::storage::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("focus_token", "abc123")?;
//! ```

pub mod serde;
pub mod storage;

// Re-export commonly used types at crate root
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
