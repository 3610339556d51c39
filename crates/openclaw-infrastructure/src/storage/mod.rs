//! Durable storage backends for `KeyValueStorage`.

pub mod atomic_file;
pub mod file_storage;
pub mod memory_storage;

pub use atomic_file::AtomicFile;
pub use file_storage::FileKeyValueStorage;
pub use memory_storage::InMemoryKeyValueStorage;
