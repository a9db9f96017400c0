use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use scribe_logging::scribe_warn;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::transport::Transport;
use crate::types::EngineEvent;
use crate::validate::validate_status;

/// Polling cadence is fixed at 3 seconds by contract; configurable but the
/// default must stay at this value for behavioral parity.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct PollerSettings {
    pub interval: Duration,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Explicit scheduling loop for the status poller.
///
/// One fetch per tick, awaited to settlement before the next tick's effects
/// can apply, so snapshots are never delivered out of order. A failed fetch
/// is logged and skipped; the next tick supersedes it. Cancellation drops
/// any in-flight fetch without delivering its result.
pub async fn run_poller(
    transport: Arc<dyn Transport>,
    settings: PollerSettings,
    sink: Arc<dyn EventSink>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tick: u64 = 0;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }
        tick += 1;
        scribe_logging::set_poll_tick(tick);

        let fetched = tokio::select! {
            _ = cancel.cancelled() => break,
            result = transport.fetch_status() => result,
        };

        match fetched {
            Ok(raw) => match validate_status(raw) {
                Ok(snapshot) => sink.emit(EngineEvent::Snapshot(snapshot)),
                Err(err) => {
                    scribe_warn!("tick {tick}: quarantined status record: {err}");
                    sink.emit(EngineEvent::SnapshotRejected);
                }
            },
            // Transient poll failure: log only, previous view survives.
            Err(err) => scribe_warn!("tick {tick}: status fetch failed: {err}"),
        }
    }
}

/// Pairs a spawned poller with guaranteed shutdown: dropping the handle
/// cancels the loop, `shutdown` additionally waits for it to finish.
pub struct PollerHandle {
    cancel: CancellationToken,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl PollerHandle {
    /// Spawn the poll loop on the current tokio runtime.
    pub fn spawn(
        transport: Arc<dyn Transport>,
        settings: PollerSettings,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let join = tokio::spawn(run_poller(transport, settings, sink, cancel.clone()));
        Self {
            cancel,
            join: Some(join),
        }
    }

    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
