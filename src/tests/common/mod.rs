pub mod mocks;

use crate::models::Post;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn post(id: i64, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Number of rendered post entries in an SSR snapshot.
pub fn count_posts(html: &str) -> usize {
    html.matches("class=\"post\"").count()
}
