use agent_core::{AgentContext, TickContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    Success,
    Failure,
}

impl Status {
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Status::Success
        } else {
            Status::Failure
        }
    }

    /// Swaps Success and Failure; Running passes through.
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

/// A node evaluated once per tree tick.
///
/// `tick` runs to completion; `Running` is an ordinary return value, not a
/// suspension. Nodes that span ticks (e.g. [`Delay`](crate::Delay)) keep
/// their own progress in node-local fields, which is why evaluation takes
/// `&mut self`. Children are owned exclusively, so a node graph cannot
/// alias or cycle.
pub trait BehaviorNode: 'static {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status;
}
