#[cfg(feature = "serde")]
use serde::Serialize;

use agent_core::{ContextValue, EventId};

/// One event observed on a tree's subscription point.
///
/// Intentionally "dumb data" so it can be recorded during simulation and
/// rendered later by whatever tooling the host prefers. Serialization is
/// one-way: logs are write-out artifacts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EventRecord {
    pub id: EventId,
    pub payload: Option<ContextValue>,
}

impl EventRecord {
    pub fn new(id: EventId, payload: Option<ContextValue>) -> Self {
        Self { id, payload }
    }
}

pub trait EventSink {
    fn emit(&mut self, record: EventRecord);
}

#[derive(Debug, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&mut self, _record: EventRecord) {}
}

#[derive(Debug, Default)]
pub struct VecEventSink {
    pub records: Vec<EventRecord>,
}

impl EventSink for VecEventSink {
    fn emit(&mut self, record: EventRecord) {
        self.records.push(record);
    }
}

/// In-memory event log for assertions and inspection.
#[derive(Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EventLog {
    pub records: Vec<EventRecord>,
}

impl EventLog {
    pub fn push(&mut self, record: EventRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in emission order, for order-only assertions.
    pub fn ids(&self) -> Vec<EventId> {
        self.records.iter().map(|r| r.id).collect()
    }
}
