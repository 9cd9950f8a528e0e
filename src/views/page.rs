use dioxus::prelude::*;
use crate::state::ViewState;
use super::{ ErrorPanel, Header, PostList };

/// Renders a `ViewState`. Holds no state of its own.
#[component]
pub fn Page(state: ViewState, on_toggle: EventHandler) -> Element {
    let theme = state.theme();

    rsx! {
        div {
            class: "app {theme}",
            if state.header_visible() {
                Header { theme, on_toggle }
            }
            div {
                class: "content",
                {
                    if let Some(message) = state.error() {
                        rsx!(ErrorPanel { message: message.to_string() })
                    } else {
                        rsx!(PostList { posts: state.posts().to_vec() })
                    }
                }
            }
        }
    }
}
