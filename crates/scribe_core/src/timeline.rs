use crate::{JobId, Stage, StatusSnapshot};

/// One entry of the static step catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Ordered catalog of the five pipeline steps. Defined once, never mutated.
pub const STEPS: [StepDefinition; 5] = [
    StepDefinition {
        label: "Uploading audio",
        icon: "🎙",
    },
    StepDefinition {
        label: "Transcribing",
        icon: "📝",
    },
    StepDefinition {
        label: "Summarizing",
        icon: "🧠",
    },
    StepDefinition {
        label: "Generating report",
        icon: "📄",
    },
    StepDefinition {
        label: "Completed",
        icon: "✅",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepView {
    pub label: &'static str,
    pub icon: &'static str,
    pub status: StepStatus,
}

pub(crate) fn stage_index(stage: Stage) -> usize {
    match stage {
        Stage::Uploading => 0,
        Stage::Transcribing => 1,
        Stage::Summarizing => 2,
        Stage::GeneratingPdf => 3,
        Stage::Completed => 4,
    }
}

/// Classify every catalog step against the given stage.
///
/// Steps before the stage are `Done`, the stage itself is `Active`, the rest
/// are `Pending`. With no stage every step is `Pending`. There is no skipped
/// or failed classification in this model.
pub fn classify(stage: Option<Stage>) -> [StepView; 5] {
    let current = stage.map(stage_index);
    std::array::from_fn(|index| {
        let status = match current {
            Some(active) if index < active => StepStatus::Done,
            Some(active) if index == active => StepStatus::Active,
            _ => StepStatus::Pending,
        };
        StepView {
            label: STEPS[index].label,
            icon: STEPS[index].icon,
            status,
        }
    })
}

/// The completion gate: the download action unlocks only when the snapshot
/// describes the tracked job and reports the terminal stage. Re-evaluated on
/// every reconciliation, never cached.
pub fn can_download(tracked: Option<&JobId>, snapshot: Option<&StatusSnapshot>) -> bool {
    match (tracked, snapshot) {
        (Some(job_id), Some(snapshot)) => {
            snapshot.file_id == *job_id && snapshot.stage == Stage::Completed
        }
        _ => false,
    }
}
