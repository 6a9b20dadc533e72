use std::sync::Arc;

use crate::catalog::store::CourseStore;
use crate::core::config::Settings;

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    catalog: CourseStore,
}

impl AppState {
    pub(crate) fn new(settings: Settings, catalog: CourseStore) -> Self {
        Self { inner: Arc::new(InnerState { settings, catalog }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn catalog(&self) -> &CourseStore {
        &self.inner.catalog
    }
}
