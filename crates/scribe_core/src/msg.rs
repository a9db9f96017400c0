#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a local audio file (or cleared the selection).
    FileChosen(Option<String>),
    /// User asked to submit the chosen file.
    UploadClicked,
    /// Transport accepted the upload; the backend assigned this id.
    UploadAccepted { job_id: crate::JobId },
    /// Transport failed; the tracked job stays unset.
    UploadFailed { message: String },
    /// The poller delivered one validated status snapshot.
    SnapshotArrived(crate::StatusSnapshot),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
