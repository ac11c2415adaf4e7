use keynav_core::SettingsStorage;
use thiserror::Error;

use crate::dom;

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Js(String),
}

/// Settings persistence backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSettingsStorage;

impl LocalSettingsStorage {
    fn handle() -> Result<web_sys::Storage, WebStorageError> {
        let win = dom::window()
            .ok_or_else(|| WebStorageError::Unavailable("no browser window".to_string()))?;
        win.local_storage()
            .map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))?
            .ok_or_else(|| WebStorageError::Unavailable("storage disabled".to_string()))
    }
}

impl SettingsStorage for LocalSettingsStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::handle()?
            .get_item(key)
            .map_err(|err| WebStorageError::Js(dom::js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Js(dom::js_error_message(&err)))
    }
}
