use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use profile_api::{LookupError, ProfileRecord, ProfileSource, StatusCode, interpret_response};

use super::ProfileExplorer;

pub(crate) const NOT_FOUND_BODY: &str =
    r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#;

/// Answers every username with a canned HTTP status and body.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    responses: HashMap<String, (u16, String)>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn respond(mut self, username: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(username.to_string(), (status, body.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProfileSource for ScriptedSource {
    fn fetch(&self, username: &str) -> Result<ProfileRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (code, body) = self
            .responses
            .get(username)
            .cloned()
            .unwrap_or((404, NOT_FOUND_BODY.to_string()));
        let status = StatusCode::from_u16(code).expect("valid status code");
        interpret_response(status, body.as_bytes())
    }
}

/// Holds each lookup until the test releases it, so arrival order can be
/// chosen independently of issue order.
pub(crate) struct GatedSource {
    gates: Mutex<HashMap<String, Receiver<()>>>,
    inner: ScriptedSource,
}

impl GatedSource {
    pub(crate) fn new(inner: ScriptedSource) -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
            inner,
        }
    }

    /// Register a gate for `username`; sending on (or dropping) the returned
    /// sender lets the lookup finish.
    pub(crate) fn gate(&self, username: &str) -> Sender<()> {
        let (tx, rx) = mpsc::channel();
        self.gates
            .lock()
            .expect("gate lock")
            .insert(username.to_string(), rx);
        tx
    }
}

impl ProfileSource for GatedSource {
    fn fetch(&self, username: &str) -> Result<ProfileRecord, LookupError> {
        let gate = self.gates.lock().expect("gate lock").remove(username);
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
        self.inner.fetch(username)
    }
}

/// Pump results until nothing is in flight or a second has passed.
pub(crate) fn settle(explorer: &mut ProfileExplorer) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while explorer.lookups.is_in_flight() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        explorer.pump_lookup_results();
    }
    explorer.pump_lookup_results();
}

/// Pump until at most `target` lookups remain outstanding.
pub(crate) fn wait_until_outstanding(explorer: &mut ProfileExplorer, target: usize) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while explorer.lookups.outstanding() > target && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        explorer.pump_lookup_results();
    }
}

pub(crate) fn scripted(source: ScriptedSource) -> (Arc<ScriptedSource>, ProfileExplorer) {
    let source = Arc::new(source);
    let explorer = ProfileExplorer::new(source.clone());
    (source, explorer)
}
