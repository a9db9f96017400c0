mod logging;
mod render;

use std::thread;
use std::time::Duration;

use scribe_core::{update, AppState, Effect, Msg};
use scribe_engine::{
    EngineEvent, EngineHandle, PollerSettings, TransportSettings, DEFAULT_POLL_INTERVAL,
};
use scribe_logging::{scribe_debug, scribe_error, scribe_info};

const USAGE: &str = "usage: scribe_app [AUDIO_FILE] [--base-url URL] [--poll-secs N]\n\
   With AUDIO_FILE: upload it and track that job to completion.\n\
   Without: watch whatever the shared status endpoint reports (Ctrl-C to quit).";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            std::process::exit(2);
        }
    };

    logging::initialize(logging::LogDestination::Both);
    scribe_info!("scribe_app starting, backend {}", options.base_url);

    let transport_settings = TransportSettings {
        base_url: options.base_url,
        ..TransportSettings::default()
    };
    let poller_settings = PollerSettings {
        interval: options.poll_interval,
    };
    let engine = EngineHandle::new(transport_settings, poller_settings)?;

    let mut state = AppState::new();
    if let Some(path) = options.audio_file {
        state = dispatch(state, Msg::FileChosen(Some(path)), &engine);
        state = dispatch(state, Msg::UploadClicked, &engine);
    }

    loop {
        while let Some(event) = engine.try_recv() {
            state = dispatch(state, event_to_msg(event), &engine);
        }

        if state.consume_dirty() {
            let view = state.view();
            render::render(&view);
            if view.can_download {
                if let Some(job_id) = state.tracked_job() {
                    println!("\nReport ready: {}", engine.report_url(job_id));
                }
                break;
            }
        }

        thread::sleep(Duration::from_millis(100));
    }

    engine.shutdown();
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, engine: &EngineHandle) -> AppState {
    let (state, effects) = update(state, msg);
    for effect in effects {
        match effect {
            Effect::SubmitUpload { path } => {
                scribe_info!("submitting upload: {path}");
                engine.submit_upload(path);
            }
            Effect::SurfaceAlert { message } => {
                scribe_error!("{message}");
                eprintln!("error: {message}");
            }
        }
    }
    state
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadAccepted { job_id } => Msg::UploadAccepted { job_id },
        EngineEvent::UploadFailed { message } => Msg::UploadFailed { message },
        EngineEvent::Snapshot(snapshot) => Msg::SnapshotArrived(snapshot),
        EngineEvent::SnapshotRejected => {
            scribe_debug!("ignored a quarantined status record");
            Msg::NoOp
        }
    }
}

struct Options {
    audio_file: Option<String>,
    base_url: String,
    poll_interval: Duration,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        audio_file: None,
        base_url: "http://127.0.0.1:8000".to_string(),
        poll_interval: DEFAULT_POLL_INTERVAL,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => {
                options.base_url = args.next().ok_or("--base-url needs a value")?;
            }
            "--poll-secs" => {
                let value = args.next().ok_or("--poll-secs needs a value")?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid --poll-secs value {value:?}"))?;
                if secs == 0 {
                    return Err("--poll-secs must be at least 1".to_string());
                }
                options.poll_interval = Duration::from_secs(secs);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}"));
            }
            _ if options.audio_file.is_none() => options.audio_file = Some(arg),
            _ => return Err("more than one audio file given".to_string()),
        }
    }

    Ok(options)
}
