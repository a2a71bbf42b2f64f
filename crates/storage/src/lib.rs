#![forbid(unsafe_code)]

mod codec;
mod error;
pub mod keys;
mod kv;
mod memory;
mod sqlite;

pub use codec::{load_json, load_or_default, store_json};
pub use error::StoreError;
pub use kv::KvStore;
pub use memory::MemoryKv;
pub use sqlite::SqliteKv;
