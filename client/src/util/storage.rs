//! Browser `localStorage` backend for the session credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the core `TokenStore` seam. Outside the browser every slot reads
//! as empty and writes are dropped, so SSR-less native builds and tests can
//! construct the app without a `window`.

use mentorhub::{StorageError, TokenStore};

/// `TokenStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_owned()))
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
