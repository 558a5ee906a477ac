//! Structured event stream for `CodeBlue`.
//!
//! Discrete, typed events emitted over the course of a session.  Events
//! are serialized as newline-delimited JSON (JSONL) and include a
//! monotonically increasing sequence number for ordering guarantees.

use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::session::Phase;

// ---------------------------------------------------------------------------
// Event variants
// ---------------------------------------------------------------------------

/// A discrete event emitted during a simulation session.
///
/// Each variant is tagged with `"type"` when serialized to JSON so
/// consumers can dispatch on the event kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A session has started (or restarted).
    SessionStarted {
        /// When the session started.
        timestamp: DateTime<Utc>,
        /// Session identifier.
        session_id: Uuid,
        /// Configured scenario name.
        scenario: String,
        /// Total scenario duration in seconds.
        total_duration: f64,
    },

    /// A new phase has been entered.
    PhaseEntered {
        /// When the transition occurred.
        timestamp: DateTime<Utc>,
        /// Session identifier.
        session_id: Uuid,
        /// The phase that was entered.
        phase: Phase,
        /// Simulated seconds at the moment of transition.
        elapsed_seconds: f64,
        /// Human-readable reason the trigger fired.
        reason: String,
    },

    /// A user action was recorded.
    ActionRecorded {
        /// When the action was recorded.
        timestamp: DateTime<Utc>,
        /// Session identifier.
        session_id: Uuid,
        /// Action id.
        action: String,
        /// Whether the action counts toward the score.
        critical: bool,
        /// Simulated seconds at the moment of recording.
        elapsed_seconds: f64,
    },

    /// The session reached Assessment and produced its outcome.
    SessionCompleted {
        /// When the session completed.
        timestamp: DateTime<Utc>,
        /// Session identifier.
        session_id: Uuid,
        /// Final score in `[0, 100]`.
        score: u8,
        /// Number of distinct actions taken.
        actions_taken: usize,
    },
}

// ---------------------------------------------------------------------------
// Envelope (adds sequence number via serde flatten)
// ---------------------------------------------------------------------------

/// Wraps an [`Event`] with a monotonically increasing sequence number.
#[derive(Debug, Serialize)]
struct EventEnvelope {
    /// Zero-based, monotonically increasing sequence counter.
    sequence: u64,
    /// The wrapped event (flattened into the same JSON object).
    #[serde(flatten)]
    event: Event,
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Buffered JSONL event writer.
///
/// Each call to [`emit`](Self::emit) increments the sequence counter,
/// serializes the event as a single JSON line, and flushes the underlying
/// writer.  Serialization or I/O failures are silently dropped because
/// observability must never break a running session.
pub struct EventEmitter {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
    sequence: AtomicU64,
}

// Box<dyn Write> is not Debug — provide a manual impl.
impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("sequence", &self.sequence.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl EventEmitter {
    /// Creates an emitter that writes to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(writer)),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates an emitter that writes to stderr.
    ///
    /// Stderr does not conflict with the CLI's human/JSON result output
    /// on stdout.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates an emitter that silently discards all events.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(Box::new(std::io::sink()))
    }

    /// Creates an emitter that writes to a file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or opened.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new(Box::new(file)))
    }

    /// Emits an event as a single JSONL line.
    ///
    /// Failures are silently dropped — observability must not break the
    /// session.
    pub fn emit(&self, event: Event) {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let envelope = EventEnvelope {
            sequence: seq,
            event,
        };

        if let Ok(mut w) = self.writer.lock() {
            if let Ok(line) = serde_json::to_string(&envelope) {
                let _ = writeln!(w, "{line}");
                let _ = w.flush();
            }
        }
    }

    /// Returns the number of events emitted so far.
    #[must_use]
    pub fn event_count(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
