use crate::value::ContextValue;

/// Interned identifier for an event fired through the context.
///
/// Wrapping a `&'static str` keeps identity comparison a pointer-and-length
/// check, cheap enough for high-frequency triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventId(pub &'static str);

/// The single handler slot a context dispatches events into.
///
/// Payloadless events pass `None`; dispatch is synchronous, so the caller of
/// `trigger_event` observes handler side effects before it returns.
pub type EventHandler = Box<dyn FnMut(EventId, Option<ContextValue>)>;
