//! `localStorage`-backed preference store.
//!
//! Implements the engine's [`PrefStore`] trait over the browser's local
//! storage. Requires a browser environment; on the server every read sees
//! an empty store and writes report [`StoreError::Unavailable`], which the
//! prefs layer logs and shrugs off.

use appearance::prefs::{PrefStore, StoreError};

/// The browser's local storage as a [`PrefStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(err) => Err(StoreError::Rejected(format!("{err:?}"))),
    }
}

impl PrefStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .get_item(key)
                .map_err(|err| StoreError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|err| StoreError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .remove_item(key)
                .map_err(|err| StoreError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
