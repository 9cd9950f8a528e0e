mod error_panel;
mod header;
mod page;
mod post_list;
mod posts_page;

pub use error_panel::ErrorPanel;
pub use header::Header;
pub use page::Page;
pub use post_list::PostList;
pub use posts_page::PostsPage;
