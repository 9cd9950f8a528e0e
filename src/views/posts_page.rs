use dioxus::prelude::*;
use crate::context::AppContext;
use crate::state::{ run_fetch, FetchHandle, ViewState };
use super::Page;

/// The whole app: loads posts once on mount and owns the theme toggle.
#[component]
pub fn PostsPage() -> Element {
    let context = use_context::<AppContext>();
    let mut state = use_signal(|| ViewState::initialize(context.store.as_ref()));

    let client = context.client.clone();
    let fetch = use_hook(move || {
        let (handle, registration) = FetchHandle::pair();
        spawn(async move {
            if !state.write().begin_fetch() {
                return;
            }
            if let Some(result) = run_fetch(registration, client.fetch_posts()).await {
                state.write().complete(result);
            }
        });
        handle
    });
    use_drop(move || fetch.abandon());

    let store = context.store.clone();

    rsx! {
        Page {
            state: state(),
            on_toggle: move |_| {
                state.write().toggle_theme(store.as_ref());
            },
        }
    }
}
