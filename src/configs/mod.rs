mod app_config;
#[cfg(not(target_arch = "wasm32"))]
mod env_validate;

pub use app_config::AppConfig;
