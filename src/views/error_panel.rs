use dioxus::prelude::*;

#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div {
            class: "error",
            h2 { "DATA FETCHING FAILED" }
            p { "{message}" }
        }
    }
}
