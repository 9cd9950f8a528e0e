mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

use std::rc::Rc;
use crate::configs::AppConfig;
use crate::utils::Theme;

pub use memory::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Where the theme preference lives between sessions.
///
/// Both operations are infallible for callers: implementations log storage
/// problems and fall back to "absent" on read and to a no-op on write.
pub trait ThemeStore {
    fn read_theme(&self) -> Option<Theme>;
    fn write_theme(&self, theme: Theme);
}

/// The persistent store for the current platform.
pub fn default_store(config: &AppConfig) -> Rc<dyn ThemeStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStore::new(config.theme_key.clone()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(FileStore::new(config.store_path.clone(), config.theme_key.clone()))
    }
}

fn parse_stored(key: &str, raw: Option<String>) -> Option<Theme> {
    let raw = raw?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("Ignoring stored value for `{}`: {}", key, e);
            None
        }
    }
}
