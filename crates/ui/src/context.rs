use std::sync::Arc;

use services::CourseProgressService;

/// UI-facing application surface, implemented by the composition root.
pub trait UiApp: Send + Sync {
    fn course_progress(&self) -> Arc<CourseProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    course_progress: Arc<CourseProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course_progress: app.course_progress(),
        }
    }

    #[must_use]
    pub fn course_progress(&self) -> Arc<CourseProgressService> {
        Arc::clone(&self.course_progress)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
