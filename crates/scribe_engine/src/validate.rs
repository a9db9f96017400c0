use scribe_core::{JobId, Stage, StatusSnapshot};

use crate::types::{RawStatus, SnapshotError};

/// Validate a wire-level status record into a typed snapshot.
///
/// The status endpoint is shared with backends that also report `idle`
/// (nothing processed yet) and `error` (pipeline failure). Neither belongs
/// to the five-step client contract, so both are rejected here and the
/// caller quarantines them; the view keeps whatever it was showing.
pub fn validate_status(raw: RawStatus) -> Result<StatusSnapshot, SnapshotError> {
    let label = raw.stage.ok_or(SnapshotError::MissingStage)?;
    let stage = parse_stage(&label).ok_or(SnapshotError::UnknownStage(label))?;

    let file_id = raw.file_id.ok_or(SnapshotError::MissingFileId)?;

    let progress = match raw.progress {
        Some(value) if (0..=100).contains(&value) => value as u8,
        Some(value) => return Err(SnapshotError::ProgressOutOfRange(value)),
        // The original backend omits progress; fall back per stage so the
        // indicator still advances.
        None => nominal_progress(stage),
    };

    Ok(StatusSnapshot {
        stage,
        message: raw.message,
        progress,
        file_id: JobId::new(file_id),
        source: raw.source,
    })
}

fn parse_stage(label: &str) -> Option<Stage> {
    match label {
        "uploading" => Some(Stage::Uploading),
        "transcribing" => Some(Stage::Transcribing),
        "summarizing" => Some(Stage::Summarizing),
        "generating_pdf" => Some(Stage::GeneratingPdf),
        "completed" => Some(Stage::Completed),
        _ => None,
    }
}

fn nominal_progress(stage: Stage) -> u8 {
    match stage {
        Stage::Uploading => 10,
        Stage::Transcribing => 40,
        Stage::Summarizing => 70,
        Stage::GeneratingPdf => 90,
        Stage::Completed => 100,
    }
}
