use dioxus::prelude::*;
use crate::models::Post;

/// One entry per post, in the order the API returned them.
#[component]
pub fn PostList(posts: Vec<Post>) -> Element {
    rsx! {
        div {
            class: "posts",
            for post in posts {
                div {
                    key: "{post.id}",
                    class: "post",
                    h2 { "{post.title}" }
                    p { "{post.body}" }
                }
            }
        }
    }
}
