use std::collections::BTreeMap;

use agent_core::{AgentContext, TickContext};

use crate::state::{State, StateId};

/// Evaluates an agent through a set of named states, at most one active.
///
/// The active state is tracked by id, a non-owning reference into the
/// registry. Shares the per-tick invocation model of the behaviour tree:
/// the host calls [`tick`](Self::tick) once per simulation step.
#[derive(Default)]
pub struct StateMachine {
    states: BTreeMap<StateId, Box<dyn State>>,
    active: Option<StateId>,
    context: AgentContext,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state under its identifier. Duplicate identifiers are
    /// ignored: the first registration wins, unlike blackboard writes.
    pub fn add(&mut self, state: Box<dyn State>) {
        let id = state.id();
        if self.states.contains_key(&id) {
            return;
        }

        self.states.insert(id, state);
    }

    /// Activates a state by id and invokes its `on_enter` immediately.
    ///
    /// An unknown id clears the active state to none. That is fail-safe
    /// behaviour, not an error: callers probing for optional states rely
    /// on the machine going idle instead of refusing.
    pub fn set(&mut self, id: StateId) {
        let Some(state) = self.states.get_mut(&id) else {
            self.active = None;
            return;
        };

        self.active = Some(id);
        state.on_enter(&mut self.context);
    }

    /// Ticks the active state; no-op when none is active.
    pub fn tick(&mut self, ctx: &TickContext) {
        let Some(id) = self.active else {
            return;
        };

        if let Some(state) = self.states.get_mut(&id) {
            state.on_tick(ctx, &mut self.context);
        }
    }

    pub fn active(&self) -> Option<StateId> {
        self.active
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AgentContext {
        &mut self.context
    }
}
