//! Scribe engine: transport, status polling and effect execution.
mod engine;
mod poller;
mod transport;
mod types;
mod validate;

pub use engine::EngineHandle;
pub use poller::{
    run_poller, ChannelEventSink, EventSink, PollerHandle, PollerSettings, DEFAULT_POLL_INTERVAL,
};
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{EngineEvent, RawStatus, SnapshotError, TransportError, UploadReceipt};
pub use validate::validate_status;
