use crate::reconcile::{reconcile, DisplayState};
use crate::{JobId, StatusSnapshot};

/// All state the client holds. Single-job model: one tracked id, one latest
/// snapshot, nothing else survives across ticks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    chosen_file: Option<String>,
    tracked: Option<JobId>,
    latest: Option<StatusSnapshot>,
    pending_upload: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the render-ready view from the current state.
    pub fn view(&self) -> DisplayState {
        reconcile(self.tracked.as_ref(), self.latest.as_ref(), self.pending_upload)
    }

    pub fn tracked_job(&self) -> Option<&JobId> {
        self.tracked.as_ref()
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn chosen_file(&self) -> Option<&str> {
        self.chosen_file.as_deref()
    }

    pub(crate) fn set_chosen_file(&mut self, path: Option<String>) {
        if self.chosen_file != path {
            self.chosen_file = path;
            self.dirty = true;
        }
    }

    /// Start tracking a fresh upload: any previously tracked job is dropped.
    pub(crate) fn begin_upload(&mut self) {
        self.tracked = None;
        self.latest = None;
        self.pending_upload = true;
        self.dirty = true;
    }

    pub(crate) fn set_tracked(&mut self, job_id: JobId) {
        self.tracked = Some(job_id);
        self.dirty = true;
    }

    pub(crate) fn abort_upload(&mut self) {
        self.pending_upload = false;
        self.dirty = true;
    }

    /// Replace the latest snapshot wholesale. An identical snapshot is a
    /// no-op so repeated polls of a settled backend do not trigger renders.
    pub(crate) fn apply_snapshot(&mut self, snapshot: StatusSnapshot) {
        if self.latest.as_ref() == Some(&snapshot) {
            return;
        }
        if self
            .tracked
            .as_ref()
            .is_some_and(|job_id| snapshot.file_id == *job_id)
        {
            self.pending_upload = false;
        }
        self.latest = Some(snapshot);
        self.dirty = true;
    }
}
