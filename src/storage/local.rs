use web_sys::Storage;
use crate::error::StoreError;
use crate::utils::Theme;
use super::{ parse_stored, ThemeStore };

/// `window.localStorage`, scoped to the page origin.
#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()?
            .ok_or(StoreError::Unavailable)
    }
}

impl ThemeStore for LocalStore {
    fn read_theme(&self) -> Option<Theme> {
        let raw = Self::storage().and_then(|storage| Ok(storage.get_item(&self.key)?));
        match raw {
            Ok(raw) => parse_stored(&self.key, raw),
            Err(e) => {
                log::warn!("Failed to read theme from localStorage: {}", e);
                None
            }
        }
    }

    fn write_theme(&self, theme: Theme) {
        let result = Self::storage()
            .and_then(|storage| Ok(storage.set_item(&self.key, theme.as_str())?));
        if let Err(e) = result {
            log::error!("Failed to persist theme to localStorage: {}", e);
        }
    }
}
