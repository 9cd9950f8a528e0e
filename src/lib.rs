pub mod views;
pub mod api;
pub mod state;
pub mod storage;
mod utils;
mod models;
mod configs;
mod context;
mod error;
#[cfg(test)]
mod tests;

pub use crate::utils::*;
pub use crate::models::Post;
pub use crate::configs::AppConfig;
pub use crate::context::AppContext;
pub use crate::error::{ FetchError, StoreError, ThemeParseError };
