use std::fmt;

/// Backend-assigned opaque job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The five backend processing phases, in pipeline order.
///
/// The backend can also report stages outside this set (`idle`, `error`);
/// those never reach the core — the engine quarantines them at the wire
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Uploading,
    Transcribing,
    Summarizing,
    GeneratingPdf,
    Completed,
}

/// The backend's most recent report, already validated by the engine.
///
/// The status endpoint is global: `file_id` names whichever job the backend
/// is currently processing, which may not be the locally tracked one.
/// Replaced wholesale on every accepted poll tick; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub stage: Stage,
    pub message: Option<String>,
    /// Percentage, 0..=100 (the engine rejects anything outside).
    pub progress: u8,
    pub file_id: JobId,
    /// Provenance tag, e.g. "web" or "bluetooth".
    pub source: Option<String>,
}
