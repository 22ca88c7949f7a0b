//! Storage layer
//!
//! Key-value slots plus the single-account session store built on them.

pub mod kv;
pub mod session;

pub use kv::{FileStore, KeyValueBackend, MemoryStore};
pub use session::SessionStore;
