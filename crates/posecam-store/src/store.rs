use crate::codec::{decode, encode};
use crate::{Storage, StoredValue};

/// Typed `store` / `load` over any `Storage`.
///
/// Nothing here fails from the caller's point of view: storage, encoding and
/// decoding errors are logged and swallowed, and `load` answers `None`.
pub struct KeyValueStore<S> {
    storage: S,
}

impl<S: Storage> KeyValueStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn store(&mut self, key: &str, value: impl Into<StoredValue>) {
        let value = value.into();
        let encoded = match encode(&value) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!("store {}: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(key, encoded) {
            log::warn!("store {}: {}", key, e);
        }
    }

    pub fn load(&self, key: &str) -> Option<StoredValue> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("load {}: {}", key, e);
                return None;
            }
        };
        match decode(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("load {}: {}", key, e);
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::warn!("remove {}: {}", key, e);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
