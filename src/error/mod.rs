mod fetch;
mod storage;

pub use fetch::FetchError;
pub use storage::{ StoreError, ThemeParseError };
