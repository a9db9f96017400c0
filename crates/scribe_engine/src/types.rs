use scribe_core::{JobId, StatusSnapshot};
use serde::Deserialize;

/// Untrusted mirror of the backend's `/status` JSON.
///
/// Everything is optional at the wire level; [`crate::validate_status`]
/// turns this into a typed [`StatusSnapshot`] or rejects it. The backend
/// historically spells the job id field `file`; newer builds use `fileId`.
/// Extra fields (`language`, `timestamp`, `error`) are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawStatus {
    pub stage: Option<String>,
    pub message: Option<String>,
    pub progress: Option<i64>,
    #[serde(rename = "fileId", alias = "file")]
    pub file_id: Option<String>,
    pub source: Option<String>,
}

/// Response body of a successful `/upload-audio` POST.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    pub status: Option<String>,
    /// The backend-assigned job identifier.
    pub audio_name: String,
}

/// Why a polled status record was quarantined instead of rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("status carries no stage")]
    MissingStage,
    #[error("unrecognized stage {0:?}")]
    UnknownStage(String),
    #[error("status carries no file id")]
    MissingFileId,
    #[error("progress {0} outside 0..=100")]
    ProgressOutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("cannot read audio file {path}: {message}")]
    FileUnreadable { path: String, message: String },
}

/// Events delivered from the engine back to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadAccepted { job_id: JobId },
    UploadFailed { message: String },
    /// One validated snapshot from a poll tick.
    Snapshot(StatusSnapshot),
    /// A poll tick returned a record that failed validation; the previous
    /// view survives untouched.
    SnapshotRejected,
}
