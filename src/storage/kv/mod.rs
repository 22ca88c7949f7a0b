//! Key-value slot storage
//!
//! String-keyed slots holding serialized JSON, the stand-in for browser
//! local storage. Backends are in-memory or a directory of files.

mod backend;
mod file;
mod memory;

pub use backend::KeyValueBackend;
pub use file::FileStore;
pub use memory::MemoryStore;
