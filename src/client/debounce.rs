use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::client::drafts::DraftStore;
use crate::schemas::enrollment::EnrollmentFormData;

/// Quiet period before an edited draft is persisted.
pub const DRAFT_AUTOSAVE_DELAY: Duration = Duration::from_millis(1000);

/// Search-as-you-type quiet period.
pub const SEARCH_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Delay-then-act with cancel-on-new-input: each call supersedes the pending
/// one, so only the action from the last call within a quiet period runs.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: Mutex::new(None) }
    }

    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(mut pending) = self.pending.lock() else {
            return;
        };
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Debounced draft persistence: edits queue a save and only the last state
/// within the quiet period hits storage. Last write wins.
pub struct DraftAutosave {
    drafts: DraftStore,
    debouncer: Debouncer,
}

impl DraftAutosave {
    pub fn new(drafts: DraftStore) -> Self {
        Self::with_delay(drafts, DRAFT_AUTOSAVE_DELAY)
    }

    pub fn with_delay(drafts: DraftStore, delay: Duration) -> Self {
        Self { drafts, debouncer: Debouncer::new(delay) }
    }

    pub fn queue(&self, course_id: &str, draft: EnrollmentFormData) {
        let drafts = self.drafts.clone();
        let course_id = course_id.to_string();
        self.debouncer.call(move || drafts.save(&course_id, &draft));
    }

    /// Persist immediately, discarding any pending save.
    pub fn flush(&self, course_id: &str, draft: &EnrollmentFormData) {
        self.debouncer.cancel();
        self.drafts.save(course_id, draft);
    }
}
