use crate::error::FetchError;
use crate::models::Post;
use crate::storage::ThemeStore;
use crate::utils::Theme;

/// What the page is showing. Exactly one of these at a time, so an error and
/// a post list can never be on screen together.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RenderMode {
    #[default]
    Init,
    Loading,
    Loaded(Vec<Post>),
    Failed(String),
}

impl RenderMode {
    pub fn is_settled(&self) -> bool {
        matches!(self, RenderMode::Loaded(_) | RenderMode::Failed(_))
    }
}

/// Everything the posts page renders from.
///
/// The fetch lifecycle runs `Init -> Loading -> Loaded | Failed` once; the
/// theme toggles independently in any mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    mode: RenderMode,
    theme: Theme,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            mode: RenderMode::Init,
            theme,
        }
    }

    /// Start from the persisted theme, or `light` when nothing is stored.
    pub fn initialize<S: ThemeStore + ?Sized>(store: &S) -> Self {
        let theme = store.read_theme().unwrap_or_default();
        log::debug!("Initial theme: {}", theme);
        Self::new(theme)
    }

    /// Move `Init -> Loading`. Returns `true` only the first time, which is
    /// the caller's cue to issue the request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.mode != RenderMode::Init {
            return false;
        }
        self.mode = RenderMode::Loading;
        true
    }

    pub fn on_fetch_success(&mut self, posts: Vec<Post>) {
        if self.mode != RenderMode::Loading {
            log::warn!("Ignoring {} posts delivered outside of loading", posts.len());
            return;
        }
        log::info!("Loaded {} posts", posts.len());
        self.mode = RenderMode::Loaded(posts);
    }

    pub fn on_fetch_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.mode != RenderMode::Loading {
            log::warn!("Ignoring fetch failure delivered outside of loading: {}", message);
            return;
        }
        log::error!("Fetching posts failed: {}", message);
        self.mode = RenderMode::Failed(message);
    }

    pub fn complete(&mut self, result: Result<Vec<Post>, FetchError>) {
        match result {
            Ok(posts) => self.on_fetch_success(posts),
            Err(e) => self.on_fetch_failure(e.to_string()),
        }
    }

    /// Flip the theme and write it through to `store`.
    pub fn toggle_theme<S: ThemeStore + ?Sized>(&mut self, store: &S) -> Theme {
        self.theme = self.theme.toggled();
        store.write_theme(self.theme);
        log::debug!("Theme switched to {}", self.theme);
        self.theme
    }

    pub fn mode(&self) -> &RenderMode {
        &self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn error(&self) -> Option<&str> {
        match &self.mode {
            RenderMode::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Posts to list; empty until loaded and while failed.
    pub fn posts(&self) -> &[Post] {
        match &self.mode {
            RenderMode::Loaded(posts) => posts,
            _ => &[],
        }
    }

    pub fn header_visible(&self) -> bool {
        self.error().is_none()
    }
}
