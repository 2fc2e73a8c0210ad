use agent_core::{AgentContext, TickContext};

/// Interned identifier a machine registers a state under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub &'static str);

/// A named state in a machine.
///
/// Callbacks default to no-ops so a state only implements what it needs.
/// There is no exit hook: transition-out work belongs in the next state's
/// `on_enter` or in blackboard facts.
pub trait State: 'static {
    fn id(&self) -> StateId;

    /// Called once when this state becomes active.
    fn on_enter(&mut self, _blackboard: &mut AgentContext) {}

    /// Called every tick while this state is active.
    fn on_tick(&mut self, _ctx: &TickContext, _blackboard: &mut AgentContext) {}
}
