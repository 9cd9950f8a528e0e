#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_THEME_KEY: &str = "theme";
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_STORE_PATH: &str = ".posts_viewer/preferences.json";

/// Settings resolved once at startup and handed to the component tree.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub posts_url: String,
    pub theme_key: String,
    #[cfg(not(target_arch = "wasm32"))]
    pub store_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl AppConfig {
    /// Browser builds have no environment; they always use the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    /// Native builds read overrides from the environment, which `main` has
    /// already populated from `.env`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        use super::env_validate::env_or_default;

        Self {
            posts_url: env_or_default("POSTS_API_URL", DEFAULT_POSTS_URL),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            store_path: PathBuf::from(env_or_default("THEME_STORE_PATH", DEFAULT_STORE_PATH)),
        }
    }
}
