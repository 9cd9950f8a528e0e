use std::rc::Rc;
use crate::api::PostsClient;
use crate::configs::AppConfig;
use crate::storage::{ default_store, ThemeStore };

/// Provided once at the root of the component tree.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: Rc<dyn ThemeStore>,
    pub client: PostsClient,
}

impl AppContext {
    pub fn new(config: AppConfig, store: Rc<dyn ThemeStore>, client: PostsClient) -> Self {
        Self { config, store, client }
    }

    /// Config from the environment plus the platform's persistent store.
    pub fn load() -> Self {
        let config = AppConfig::load();
        let store = default_store(&config);
        let client = PostsClient::new(config.posts_url.clone());
        Self::new(config, store, client)
    }
}
