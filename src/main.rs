use dioxus::prelude::*;
use posts_viewer::views::PostsPage;
use posts_viewer::AppContext;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppContext::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        PostsPage {}
    }
}
