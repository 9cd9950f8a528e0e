use dioxus::prelude::*;
use crate::utils::Theme;

#[component]
pub fn Header(theme: Theme, on_toggle: EventHandler) -> Element {
    rsx! {
        div {
            class: "header",
            button {
                onclick: move |_| on_toggle.call(()),
                {theme.toggle_label()}
            }
            div {
                class: "post-title",
                h1 { "Posts" }
            }
        }
    }
}
