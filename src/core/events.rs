//! Registry events and the sinks that receive them
//!
//! Every registry outcome (patron added, removed, not found, line skipped,
//! batch completed or failed) is emitted as a [`RegistryEvent`] to an
//! [`EventSink`]. The registry itself never prints.

use crate::core::ingest::LineRejection;
use crate::domain::{Patron, PatronId};
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

/// Outcome reported by a registry operation
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// A patron was appended to the registry
    PatronAdded(Patron),

    /// A patron was removed; its ID stays retired
    PatronRemoved(Patron),

    /// No patron matched the requested ID
    PatronNotFound { id: String },

    /// An ingestion line was skipped
    LineSkipped {
        line_number: usize,
        line: String,
        reason: LineRejection,
    },

    /// An ingestion batch finished
    IngestCompleted { source: String, loaded: usize },

    /// An ingestion batch was aborted by an I/O error or ID exhaustion
    IngestFailed { source: String, error: String },
}

impl RegistryEvent {
    /// True for events that describe something the caller may need to fix
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            RegistryEvent::PatronNotFound { .. }
                | RegistryEvent::LineSkipped { .. }
                | RegistryEvent::IngestFailed { .. }
        )
    }

    /// ID of the patron the event is about, if any
    pub fn patron_id(&self) -> Option<&PatronId> {
        match self {
            RegistryEvent::PatronAdded(p) | RegistryEvent::PatronRemoved(p) => Some(p.id()),
            _ => None,
        }
    }
}

impl fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryEvent::PatronAdded(patron) => {
                write!(f, "Patron added to Library List: {patron}")
            }
            RegistryEvent::PatronRemoved(patron) => {
                write!(f, "Patron removed from Library List: {patron}")
            }
            RegistryEvent::PatronNotFound { id } => write!(f, "Patron not found using ID: {id}"),
            RegistryEvent::LineSkipped { line, reason, .. } => match reason {
                LineRejection::FieldCount { .. } => write!(f, "Invalid line format: {line}"),
                LineRejection::InvalidFine { .. } => {
                    write!(f, "Invalid fine amount format for entry: {line}")
                }
                LineRejection::Invalid(_) => {
                    write!(f, "Skipping invalid patron entry: {line} - {reason}")
                }
                LineRejection::FineOutOfRange { .. } => write!(f, "{reason}"),
            },
            RegistryEvent::IngestCompleted { loaded, .. } => {
                write!(f, "{loaded} patrons loaded successfully.")
            }
            RegistryEvent::IngestFailed { error, .. } => {
                write!(f, "Error reading from file: {error}")
            }
        }
    }
}

/// Receiver for registry events
///
/// Implemented for any `FnMut(&RegistryEvent)` closure, so a callback can be
/// passed directly.
pub trait EventSink {
    fn emit(&mut self, event: &RegistryEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&RegistryEvent),
{
    fn emit(&mut self, event: &RegistryEvent) {
        self(event)
    }
}

/// Logs every event through `tracing`
///
/// This is the default sink of a new registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &RegistryEvent) {
        let patron_id = event.patron_id().map(PatronId::as_str);
        if event.is_problem() {
            tracing::warn!(event = %event, patron_id, "Registry event");
        } else {
            tracing::info!(event = %event, patron_id, "Registry event");
        }
    }
}

/// Writes one human-readable line per event
///
/// Used by the CLI with stdout; write failures are logged and otherwise ignored
/// so that reporting never interrupts a registry operation.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &RegistryEvent) {
        if let Err(e) = writeln!(self.out, "{event}") {
            tracing::error!(error = %e, "Failed to write registry event");
        }
    }
}

/// Shared in-memory event recorder
///
/// Clones share the same buffer, so one handle can be given to the registry
/// and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<RegistryEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.borrow().clone()
    }

    /// Human-readable lines of all events recorded so far
    pub fn messages(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &RegistryEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
