use pretty_assertions::assert_eq;
use scribe_core::{
    reconcile, JobId, Stage, StatusSnapshot, StepStatus, IDLE_MESSAGE, PROCESSING_MESSAGE,
};

fn snapshot(id: &str, stage: Stage, progress: u8) -> StatusSnapshot {
    StatusSnapshot {
        stage,
        message: None,
        progress,
        file_id: JobId::new(id),
        source: Some("bluetooth".to_string()),
    }
}

fn statuses(view: &scribe_core::DisplayState) -> Vec<StepStatus> {
    view.steps.iter().map(|step| step.status).collect()
}

#[test]
fn no_upload_yet_yields_idle_placeholder_whatever_the_backend_reports() {
    // Scenario A: a job started by the side-channel drop is in flight, but
    // nothing was uploaded locally.
    let foreign = snapshot("x", Stage::Transcribing, 40);

    let view = reconcile(None, Some(&foreign), false);

    assert_eq!(view.message, IDLE_MESSAGE);
    assert!(!view.show_timeline);
    assert!(!view.can_download);
    assert_eq!(view.stage_index, None);
    assert!(view.steps.iter().all(|s| s.status == StepStatus::Pending));
}

#[test]
fn matching_snapshot_drives_the_timeline() {
    // Scenario B.
    let tracked = JobId::new("a1");
    let current = snapshot("a1", Stage::Summarizing, 55);

    let view = reconcile(Some(&tracked), Some(&current), false);

    assert!(view.show_timeline);
    assert_eq!(view.progress, 55);
    assert_eq!(view.message, PROCESSING_MESSAGE);
    assert_eq!(
        statuses(&view),
        vec![
            StepStatus::Done,
            StepStatus::Done,
            StepStatus::Active,
            StepStatus::Pending,
            StepStatus::Pending,
        ]
    );
    assert!(!view.can_download);
}

#[test]
fn foreign_snapshot_is_discarded_for_display() {
    // Scenario C: an unrelated job finished; that must not leak into this
    // job's presentation, whatever its stage or progress.
    let tracked = JobId::new("a1");
    for stage in [
        Stage::Uploading,
        Stage::Transcribing,
        Stage::Summarizing,
        Stage::GeneratingPdf,
        Stage::Completed,
    ] {
        let foreign = snapshot("b2", stage, 100);
        let view = reconcile(Some(&tracked), Some(&foreign), false);

        assert_eq!(view.message, IDLE_MESSAGE);
        assert!(!view.show_timeline);
        assert!(!view.can_download);
    }
}

#[test]
fn completed_matching_snapshot_opens_the_gate() {
    // Scenario D.
    let tracked = JobId::new("a1");
    let done = snapshot("a1", Stage::Completed, 100);

    let view = reconcile(Some(&tracked), Some(&done), false);

    assert!(view.can_download);
    assert_eq!(view.progress, 100);
    assert_eq!(
        statuses(&view),
        vec![
            StepStatus::Done,
            StepStatus::Done,
            StepStatus::Done,
            StepStatus::Done,
            StepStatus::Active,
        ]
    );
}

#[test]
fn snapshot_message_passes_through_and_defaults_when_absent() {
    let tracked = JobId::new("a1");
    let mut current = snapshot("a1", Stage::Transcribing, 40);

    let view = reconcile(Some(&tracked), Some(&current), false);
    assert_eq!(view.message, PROCESSING_MESSAGE);

    current.message = Some("Transcribing consultation audio".to_string());
    let view = reconcile(Some(&tracked), Some(&current), false);
    assert_eq!(view.message, "Transcribing consultation audio");
}

#[test]
fn progress_is_clamped_defensively() {
    let tracked = JobId::new("a1");
    let mut current = snapshot("a1", Stage::Transcribing, 40);
    current.progress = 255;

    let view = reconcile(Some(&tracked), Some(&current), false);
    assert_eq!(view.progress, 100);
}

#[test]
fn reconcile_is_pure_and_deterministic() {
    let tracked = JobId::new("a1");
    let current = snapshot("a1", Stage::GeneratingPdf, 90);

    let first = reconcile(Some(&tracked), Some(&current), false);
    for _ in 0..5 {
        assert_eq!(reconcile(Some(&tracked), Some(&current), false), first);
    }
}
