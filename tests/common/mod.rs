//! Shared fixtures for integration tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use wsgate::observability::RequestObserver;
use wsgate::TriggerEvent;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load and parse a fixture event.
#[allow(dead_code)]
pub fn load_event(name: &str) -> TriggerEvent {
    let bytes = std::fs::read(fixture_path(name)).unwrap();
    TriggerEvent::from_slice(&bytes).unwrap()
}

/// Parse an event from an inline JSON value.
pub fn event(value: Value) -> TriggerEvent {
    TriggerEvent::from_value(value).unwrap()
}

/// Observer that keeps every record it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub records: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

impl RequestObserver for RecordingObserver {
    fn event_received(&self, event: &Value) {
        self.records.lock().unwrap().push(format!("event:{}", event));
    }

    fn path_resolved(&self, path: &str) {
        self.records.lock().unwrap().push(format!("path:{}", path));
    }
}
