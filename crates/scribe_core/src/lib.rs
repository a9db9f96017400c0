//! Scribe core: pure state machine for tracking one audio-processing job.
mod effect;
mod msg;
mod reconcile;
mod snapshot;
mod state;
mod timeline;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use reconcile::{
    reconcile, DisplayState, IDLE_MESSAGE, OPTIMISTIC_PROGRESS, PROCESSING_MESSAGE,
};
pub use snapshot::{JobId, Stage, StatusSnapshot};
pub use state::AppState;
pub use timeline::{can_download, classify, StepDefinition, StepStatus, StepView, STEPS};
pub use update::{update, NO_FILE_MESSAGE};
