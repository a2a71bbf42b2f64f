#![forbid(unsafe_code)]

use crate::StoreError;

/// Contract of the hosted key-value collaborator. The tracker is written
/// against this trait only; implementations decide durability.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
