use std::sync::{Arc, Mutex};
use std::time::Duration;

use scribe_core::{JobId, Stage};
use scribe_engine::{
    EngineEvent, EventSink, PollerHandle, PollerSettings, ReqwestTransport, Transport,
    TransportSettings,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn collected(&self) -> Arc<Mutex<Vec<EngineEvent>>> {
        self.events.clone()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn transport_for(server: &MockServer) -> Arc<dyn Transport> {
    let settings = TransportSettings {
        base_url: server.uri(),
        ..TransportSettings::default()
    };
    Arc::new(ReqwestTransport::new(settings).expect("transport"))
}

fn fast_cadence() -> PollerSettings {
    PollerSettings {
        interval: Duration::from_millis(10),
    }
}

/// Wait until the predicate matches the collected events, or panic.
async fn wait_for(events: &Arc<Mutex<Vec<EngineEvent>>>, pred: impl Fn(&[EngineEvent]) -> bool) {
    for _ in 0..200 {
        if pred(&events.lock().unwrap()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("poller never produced the expected events: {:?}", events.lock().unwrap());
}

#[tokio::test]
async fn poller_emits_validated_snapshots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"stage": "transcribing", "file": "abc123", "source": "bluetooth"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let events = sink.collected();
    let handle = PollerHandle::spawn(transport_for(&server), fast_cadence(), Arc::new(sink));

    wait_for(&events, |events| {
        events
            .iter()
            .any(|e| matches!(e, EngineEvent::Snapshot(_)))
    })
    .await;
    handle.shutdown().await;

    let events = events.lock().unwrap();
    let snapshot = events
        .iter()
        .find_map(|e| match e {
            EngineEvent::Snapshot(s) => Some(s.clone()),
            _ => None,
        })
        .expect("snapshot event");
    assert_eq!(snapshot.stage, Stage::Transcribing);
    assert_eq!(snapshot.file_id, JobId::new("abc123"));
    assert_eq!(snapshot.source.as_deref(), Some("bluetooth"));
}

#[tokio::test]
async fn out_of_contract_stages_are_quarantined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"stage": "error", "file": "abc123", "error": "transcription failed"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let events = sink.collected();
    let handle = PollerHandle::spawn(transport_for(&server), fast_cadence(), Arc::new(sink));

    wait_for(&events, |events| {
        events
            .iter()
            .any(|e| matches!(e, EngineEvent::SnapshotRejected))
    })
    .await;
    handle.shutdown().await;

    // Quarantined records never surface as snapshots.
    assert!(events
        .lock()
        .unwrap()
        .iter()
        .all(|e| !matches!(e, EngineEvent::Snapshot(_))));
}

#[tokio::test]
async fn a_failed_tick_never_stops_subsequent_ticks() {
    let server = MockServer::start().await;
    // First tick hits a transient 500, later ticks succeed.
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"stage": "completed", "file": "abc123", "source": "web"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let events = sink.collected();
    let handle = PollerHandle::spawn(transport_for(&server), fast_cadence(), Arc::new(sink));

    wait_for(&events, |events| {
        events
            .iter()
            .any(|e| matches!(e, EngineEvent::Snapshot(s) if s.stage == Stage::Completed))
    })
    .await;
    handle.shutdown().await;
}

#[tokio::test]
async fn shutdown_discards_an_in_flight_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_raw(
                    r#"{"stage": "completed", "file": "abc123"}"#,
                    "application/json",
                ),
        )
        .mount(&server)
        .await;

    let sink = TestSink::new();
    let events = sink.collected();
    let handle = PollerHandle::spawn(transport_for(&server), fast_cadence(), Arc::new(sink));

    // Let the first fetch start, then cancel while it is still pending.
    tokio::time::sleep(Duration::from_millis(30)).await;
    tokio::time::timeout(Duration::from_secs(1), handle.shutdown())
        .await
        .expect("shutdown must not wait for the slow fetch");

    // The in-flight result must not be delivered after teardown.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(events.lock().unwrap().is_empty());
}
