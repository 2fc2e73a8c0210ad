use std::collections::BTreeMap;

use crate::event::{EventHandler, EventId};
use crate::value::{ContextPayload, ContextValue};

/// Per-agent working memory shared by every node or state evaluating that
/// agent.
///
/// Keys are case-sensitive strings, created on first write and overwritten
/// unconditionally afterwards (last write wins, including the tag). Missing
/// or tag-mismatched reads are a normal path and resolve to the caller's
/// default; nothing in here panics.
#[derive(Default)]
pub struct AgentContext {
    state: BTreeMap<String, ContextValue>,
    handler: Option<EventHandler>,
}

impl AgentContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a payload under `key`.
    pub fn write<T: ContextPayload>(&mut self, key: &str, value: T) {
        self.write_value(key, value.into_value());
    }

    /// Upserts an already-tagged value. Overwriting reuses the existing
    /// key allocation.
    pub fn write_value(&mut self, key: &str, value: ContextValue) {
        if let Some(slot) = self.state.get_mut(key) {
            *slot = value;
            return;
        }

        self.state.insert(key.to_owned(), value);
    }

    /// Reads a payload, falling back to `default` when the key is absent or
    /// stored under a different tag.
    pub fn read<T: ContextPayload>(&self, key: &str, default: T) -> T {
        self.try_read(key).unwrap_or(default)
    }

    /// Like [`read`](Self::read), but lets the caller distinguish "absent or
    /// mismatched" from "equals the default".
    pub fn try_read<T: ContextPayload>(&self, key: &str) -> Option<T> {
        T::from_value(*self.state.get(key)?)
    }

    pub fn remove(&mut self, key: &str) {
        self.state.remove(key);
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.state.contains_key(key)
    }

    /// Drops every entry. Used when an agent respawns or its evaluator is
    /// reused for an unrelated agent. The event handler survives.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Installs the event handler. At most one is registered; a later
    /// install replaces the earlier one.
    pub fn on_event(&mut self, handler: impl FnMut(EventId, Option<ContextValue>) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Fires an event through the registered handler, synchronously. With no
    /// handler installed this is a no-op. The mapping is not touched.
    pub fn trigger_event(&mut self, id: EventId, payload: Option<ContextValue>) {
        if let Some(handler) = self.handler.as_mut() {
            handler(id, payload);
        }
    }
}
