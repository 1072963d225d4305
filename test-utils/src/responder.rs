//! Recording double for command interaction responses.
//!
//! `RecordingResponder` stands in for a live interaction. It records every
//! response a command sends, in order, and tracks whether an initial response
//! exists the same way Discord does. The bot crate implements its response trait
//! for it in its own test modules.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// How a response was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Initial response visible to the channel
    Reply,
    /// Initial response visible only to the invoker
    ReplyEphemeral,
    /// Edit of the initial response
    Edit,
    /// Additional message visible only to the invoker
    FollowupEphemeral,
}

impl ResponseKind {
    /// Whether this kind creates the initial response.
    pub fn is_initial(self) -> bool {
        matches!(self, ResponseKind::Reply | ResponseKind::ReplyEphemeral)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedResponse {
    pub kind: ResponseKind,
    pub content: String,
}

/// Interaction double recording the responses sent to it.
#[derive(Debug, Default)]
pub struct RecordingResponder {
    responses: Mutex<Vec<RecordedResponse>>,
    responded: AtomicBool,
    roundtrip_ms: i64,
    heartbeat: Option<Duration>,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the latencies reported to commands that measure them.
    pub fn with_latency(mut self, roundtrip_ms: i64, heartbeat: Option<Duration>) -> Self {
        self.roundtrip_ms = roundtrip_ms;
        self.heartbeat = heartbeat;
        self
    }

    /// Records a response and marks the interaction responded for initial kinds.
    pub fn record(&self, kind: ResponseKind, content: &str) {
        if kind.is_initial() {
            self.responded.store(true, Ordering::Release);
        }

        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedResponse {
                kind,
                content: content.to_string(),
            });
    }

    pub fn has_responded(&self) -> bool {
        self.responded.load(Ordering::Acquire)
    }

    /// All responses recorded so far, in the order they were sent.
    pub fn responses(&self) -> Vec<RecordedResponse> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn roundtrip_ms(&self) -> i64 {
        self.roundtrip_ms
    }

    pub fn heartbeat(&self) -> Option<Duration> {
        self.heartbeat
    }
}
