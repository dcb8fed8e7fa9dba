//! Loading/error status of remote requests
//!
//! Every request gets a sequence number from [`RequestStatus::begin_with`].
//! Only the newest request of each [`RequestSlot`] may settle; older
//! completions for the same slot are reported as stale and must be dropped.
//! Creates are keyed by their own sequence number, so no create ever
//! supersedes another.

use serde_json::Value;
use std::collections::HashMap;

/// Logical operation a request belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    Load,
    /// One create, keyed by the sequence number it was issued with
    Add(u64),
    Remove(String),
}

/// Transitions of the status record
#[derive(Debug, Clone, PartialEq)]
pub enum HttpAction {
    Send,
    Response(Value),
    Error(String),
    Clear,
}

/// Status shown to the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<Value>,
}

/// Reduce the status record by one action
pub fn http_reducer(current: HttpState, action: HttpAction) -> HttpState {
    match action {
        HttpAction::Send => HttpState {
            loading: true,
            error: None,
            data: None,
        },
        HttpAction::Response(data) => HttpState {
            loading: false,
            data: Some(data),
            ..current
        },
        HttpAction::Error(message) => HttpState {
            loading: false,
            error: Some(message),
            data: None,
        },
        HttpAction::Clear => HttpState {
            error: None,
            ..current
        },
    }
}

/// Status record plus the sequence fence for in-flight requests
#[derive(Debug, Clone, Default)]
pub struct RequestStatus {
    state: HttpState,
    next_seq: u64,
    latest: HashMap<RequestSlot, u64>,
}

impl RequestStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request for `slot` and mark the status as loading
    pub fn begin(&mut self, slot: RequestSlot) -> u64 {
        self.begin_with(|_| slot)
    }

    /// Like [`begin`](Self::begin), for slots that depend on the new
    /// sequence number
    pub fn begin_with<F>(&mut self, slot_for: F) -> u64
    where
        F: FnOnce(u64) -> RequestSlot,
    {
        self.next_seq += 1;
        let seq = self.next_seq;
        let slot = slot_for(seq);
        if let Some(previous) = self.latest.insert(slot.clone(), seq) {
            tracing::debug!("Request {} supersedes {} for {:?}", seq, previous, slot);
        }
        self.apply(HttpAction::Send);
        seq
    }

    /// Settle a successful request. Returns `false` for stale completions,
    /// which leave the status untouched.
    pub fn complete(&mut self, slot: &RequestSlot, seq: u64, data: Value) -> bool {
        if !self.take_latest(slot, seq) {
            return false;
        }
        self.apply(HttpAction::Response(data));
        self.keep_loading_for_others();
        true
    }

    /// Settle a failed request with the user-facing message of its flow.
    /// Returns `false` for stale completions.
    pub fn fail(&mut self, slot: &RequestSlot, seq: u64, message: impl Into<String>) -> bool {
        if !self.take_latest(slot, seq) {
            return false;
        }
        self.apply(HttpAction::Error(message.into()));
        self.keep_loading_for_others();
        true
    }

    /// Dismiss the error message
    pub fn clear(&mut self) {
        self.apply(HttpAction::Clear);
    }

    pub fn is_latest(&self, slot: &RequestSlot, seq: u64) -> bool {
        self.latest.get(slot) == Some(&seq)
    }

    pub fn in_flight(&self) -> usize {
        self.latest.len()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn last_result(&self) -> Option<&Value> {
        self.state.data.as_ref()
    }

    pub fn state(&self) -> &HttpState {
        &self.state
    }

    fn apply(&mut self, action: HttpAction) {
        let current = std::mem::take(&mut self.state);
        self.state = http_reducer(current, action);
    }

    fn take_latest(&mut self, slot: &RequestSlot, seq: u64) -> bool {
        if !self.is_latest(slot, seq) {
            tracing::debug!("Dropping stale completion {} for {:?}", seq, slot);
            return false;
        }
        self.latest.remove(slot);
        true
    }

    // Another slot may still be waiting on the network.
    fn keep_loading_for_others(&mut self) {
        if !self.latest.is_empty() {
            self.state.loading = true;
        }
    }
}
