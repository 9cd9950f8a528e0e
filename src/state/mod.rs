mod fetch;
mod view_state;

pub use fetch::{ run_fetch, FetchHandle, FetchResult };
pub use view_state::{ RenderMode, ViewState };
