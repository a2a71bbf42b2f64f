#![forbid(unsafe_code)]

use crate::{KvStore, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads and decodes one logical key. A missing key is `Ok(None)`; a value
/// that does not decode as `T` is `InvalidValue`.
pub fn load_json<T, S>(kv: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    match kv.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|_| StoreError::InvalidValue("malformed stored value")),
    }
}

pub fn load_or_default<T, S>(kv: &S, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
    S: KvStore + ?Sized,
{
    Ok(load_json(kv, key)?.unwrap_or_default())
}

pub fn store_json<T, S>(kv: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|_| StoreError::InvalidValue("unserializable value"))?;
    kv.set(key, &raw)
}
