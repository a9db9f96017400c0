use crate::{AppState, Effect, Msg};

pub const NO_FILE_MESSAGE: &str = "No file selected";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(path) => {
            state.set_chosen_file(path);
            Vec::new()
        }
        Msg::UploadClicked => {
            let chosen = state.chosen_file().map(str::to_owned);
            match chosen {
                // Validation failure: no side effects, no network action.
                None => vec![Effect::SurfaceAlert {
                    message: NO_FILE_MESSAGE.to_string(),
                }],
                Some(path) => {
                    state.begin_upload();
                    vec![Effect::SubmitUpload { path }]
                }
            }
        }
        Msg::UploadAccepted { job_id } => {
            state.set_tracked(job_id);
            Vec::new()
        }
        Msg::UploadFailed { message } => {
            state.abort_upload();
            vec![Effect::SurfaceAlert { message }]
        }
        Msg::SnapshotArrived(snapshot) => {
            state.apply_snapshot(snapshot);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
