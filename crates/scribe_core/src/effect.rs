#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine to POST the audio file to the backend.
    SubmitUpload { path: String },
    /// Show a user-visible alert (validation or submission failure).
    SurfaceAlert { message: String },
}
