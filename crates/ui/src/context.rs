use std::sync::Arc;

use services::ProgressTracker;

pub trait UiApp: Send + Sync {
    fn tracker(&self) -> Arc<ProgressTracker>;

    fn app_title(&self) -> String {
        "Study Quest".to_owned()
    }
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    tracker: Arc<ProgressTracker>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.app_title(),
            tracker: app.tracker(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
