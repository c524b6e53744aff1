//! A typed value mirrored to a [`KeyValueStore`] key.
//!
//! Loading never fails: a missing key, an unreadable store, or a value that
//! no longer deserializes all fall back to the caller's default. Every
//! update is written straight back as JSON.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::KeyValueStore;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct Persisted<T> {
    key: String,
    value: T,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read `key` from `store`, or use `default()` if it is absent or unusable.
    pub fn load(store: &dyn KeyValueStore, key: &str, default: impl FnOnce() -> T) -> Self {
        let value = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Failed to parse stored key {key:?}, using default: {e}");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                tracing::warn!("Error reading stored key {key:?}, using default: {e}");
                default()
            }
        };

        Self {
            key: key.to_string(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it through. On `Err` the in-memory value
    /// is already replaced.
    pub fn set(&mut self, store: &dyn KeyValueStore, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.save(store)
    }

    /// Mutate the value in place and write it through. On `Err` the
    /// in-memory value is already updated and the store is stale.
    pub fn update<R>(
        &mut self,
        store: &dyn KeyValueStore,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, StoreError> {
        let out = f(&mut self.value);
        self.save(store)?;
        Ok(out)
    }

    fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.value)?;
        store.set(&self.key, &json)
    }
}
