use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use scribe_core::JobId;
use scribe_logging::scribe_info;
use tokio_util::sync::CancellationToken;

use crate::poller::{run_poller, ChannelEventSink, PollerSettings};
use crate::transport::{ReqwestTransport, Transport, TransportSettings};
use crate::types::{EngineEvent, TransportError};

enum EngineCommand {
    SubmitUpload { path: PathBuf },
}

/// Owns the background runtime thread: the status poller runs for the
/// handle's whole lifetime, upload commands are executed as they arrive,
/// and everything is reported back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    transport: Arc<ReqwestTransport>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(
        transport_settings: TransportSettings,
        poller_settings: PollerSettings,
    ) -> Result<Self, TransportError> {
        let transport = Arc::new(ReqwestTransport::new(transport_settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();

        let worker_transport: Arc<dyn Transport> = transport.clone();
        let worker_cancel = cancel.clone();
        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let sink = Arc::new(ChannelEventSink::new(event_tx.clone()));
            runtime.spawn(run_poller(
                worker_transport.clone(),
                poller_settings,
                sink,
                worker_cancel,
            ));

            while let Ok(command) = cmd_rx.recv() {
                let transport = worker_transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(transport.as_ref(), command, event_tx).await;
                });
            }
            // Dropping the runtime here tears down the poller task with it.
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            transport,
            cancel,
        })
    }

    pub fn submit_upload(&self, path: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitUpload { path: path.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn report_url(&self, job_id: &JobId) -> String {
        self.transport.report_url(job_id)
    }

    /// Stop the poller deterministically. Idempotent.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    transport: &dyn Transport,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::SubmitUpload { path } => {
            let event = match transport.submit_audio(&path).await {
                Ok(receipt) => {
                    scribe_info!("upload accepted, job id {}", receipt.audio_name);
                    EngineEvent::UploadAccepted {
                        job_id: JobId::new(receipt.audio_name),
                    }
                }
                Err(err) => EngineEvent::UploadFailed {
                    message: err.to_string(),
                },
            };
            let _ = event_tx.send(event);
        }
    }
}
