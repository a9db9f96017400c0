use crate::timeline::{can_download, classify, stage_index, StepView};
use crate::{JobId, Stage, StatusSnapshot};

pub const IDLE_MESSAGE: &str = "Waiting for audio";
pub const PROCESSING_MESSAGE: &str = "Processing…";
/// Nominal placeholder shown while an upload is in flight, before the
/// backend has reported anything.
pub const OPTIMISTIC_PROGRESS: u8 = 10;

/// Render-ready view state, derived fresh on every reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub stage_index: Option<usize>,
    pub message: String,
    pub progress: u8,
    pub show_timeline: bool,
    pub can_download: bool,
    pub steps: [StepView; 5],
}

impl DisplayState {
    fn idle() -> Self {
        Self {
            stage_index: None,
            message: IDLE_MESSAGE.to_string(),
            progress: 0,
            show_timeline: false,
            can_download: false,
            steps: classify(None),
        }
    }

    fn uploading_placeholder() -> Self {
        Self {
            stage_index: Some(stage_index(Stage::Uploading)),
            message: "Uploading audio…".to_string(),
            progress: OPTIMISTIC_PROGRESS,
            show_timeline: true,
            can_download: false,
            steps: classify(Some(Stage::Uploading)),
        }
    }
}

/// Decide whether the latest snapshot pertains to the tracked job and derive
/// the view from it.
///
/// A snapshot whose `file_id` differs from the tracked id is discarded for
/// display purposes: it belongs to some other job (for instance one started
/// by the backend's side-channel file drop) and must not overwrite the
/// tracked job's presentation. Pure function of its inputs.
pub fn reconcile(
    tracked: Option<&JobId>,
    latest: Option<&StatusSnapshot>,
    pending_upload: bool,
) -> DisplayState {
    let matching = match (tracked, latest) {
        (Some(job_id), Some(snapshot)) if snapshot.file_id == *job_id => Some(snapshot),
        _ => None,
    };

    let Some(snapshot) = matching else {
        // Once submission begins the view never drops back to idle.
        if pending_upload {
            return DisplayState::uploading_placeholder();
        }
        return DisplayState::idle();
    };

    let message = snapshot
        .message
        .clone()
        .unwrap_or_else(|| PROCESSING_MESSAGE.to_string());

    DisplayState {
        stage_index: Some(stage_index(snapshot.stage)),
        message,
        // The engine already rejects out-of-range values; clamp anyway.
        progress: snapshot.progress.min(100),
        show_timeline: true,
        can_download: can_download(tracked, Some(snapshot)),
        steps: classify(Some(snapshot.stage)),
    }
}
