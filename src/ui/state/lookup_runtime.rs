use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use profile_api::ProfileSource;
use ratatui_image::picker::Picker;

use super::ResponsePolicy;
use crate::ui::lookup::{self, LookupResult};

/// Issues lookups and decides which of their results may touch the UI.
pub(crate) struct LookupRuntime {
    source: Arc<dyn ProfileSource>,
    picker: Option<Picker>,
    tx: Sender<LookupResult>,
    rx: Receiver<LookupResult>,
    policy: ResponsePolicy,
    next_id: u64,
    latest_id: Option<u64>,
    outstanding: usize,
}

impl LookupRuntime {
    pub(crate) fn new(source: Arc<dyn ProfileSource>, policy: ResponsePolicy) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            picker: None,
            tx,
            rx,
            policy,
            next_id: 0,
            latest_id: None,
            outstanding: 0,
        }
    }

    pub(crate) fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    /// Encode avatars with `picker` from now on; `None` stops fetching them.
    pub(crate) fn set_picker(&mut self, picker: Option<Picker>) {
        self.picker = picker;
    }

    /// Start a lookup for `query` and return its id.
    pub(crate) fn issue(&mut self, query: String) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        let id = self.next_id;
        self.latest_id = Some(id);
        self.outstanding += 1;
        lookup::spawn(
            Arc::clone(&self.source),
            self.picker.clone(),
            id,
            query,
            self.tx.clone(),
        );
        id
    }

    pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
        Some(result_id) == self.latest_id
    }

    /// Whether a result should replace the displayed state under the policy.
    pub(crate) fn should_apply(&self, result_id: u64) -> bool {
        match self.policy {
            ResponsePolicy::Latest => self.matches_latest(result_id),
            ResponsePolicy::LastArrival => true,
        }
    }

    pub(crate) fn record_completion(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    pub(crate) fn has_issued(&self) -> bool {
        self.latest_id.is_some()
    }

    pub(crate) fn issued_count(&self) -> u64 {
        self.next_id
    }

    #[cfg(test)]
    pub(crate) fn outstanding(&self) -> usize {
        self.outstanding
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.outstanding > 0
    }

    pub(crate) fn try_recv(&mut self) -> Result<LookupResult, TryRecvError> {
        self.rx.try_recv()
    }
}
