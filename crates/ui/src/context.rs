use std::sync::Arc;

use services::{ProgressService, SettingsService};
use tracker_core::model::Syllabus;

pub trait UiApp: Send + Sync {
    fn syllabus(&self) -> Arc<Syllabus>;

    fn progress(&self) -> Arc<ProgressService>;
    fn settings(&self) -> Arc<SettingsService>;
}

#[derive(Clone)]
pub struct AppContext {
    syllabus: Arc<Syllabus>,

    progress: Arc<ProgressService>,
    settings: Arc<SettingsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            syllabus: app.syllabus(),
            progress: app.progress(),
            settings: app.settings(),
        }
    }

    #[must_use]
    pub fn syllabus(&self) -> Arc<Syllabus> {
        Arc::clone(&self.syllabus)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
