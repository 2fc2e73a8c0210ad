//! Blackboard-coupled leaf nodes: the small vocabulary trees are usually
//! authored from before reaching for [`Condition`](crate::Condition) or
//! [`Action`](crate::Action) closures.

use agent_core::{AgentContext, ContextPayload, ContextValue, EventId, TickContext};

use crate::bt::{BehaviorNode, Status};

/// Writes `true` under `key`. Always succeeds.
pub struct SetFlag {
    key: String,
}

impl SetFlag {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl BehaviorNode for SetFlag {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        blackboard.write(&self.key, true);
        Status::Success
    }
}

/// Writes a fixed value under `key`. Always succeeds.
pub struct SetVariable {
    key: String,
    value: ContextValue,
}

impl SetVariable {
    pub fn new(key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl BehaviorNode for SetVariable {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        blackboard.write_value(&self.key, self.value);
        Status::Success
    }
}

/// Succeeds iff `key` exists, under any tag.
pub struct HasFlag {
    key: String,
}

impl HasFlag {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl BehaviorNode for HasFlag {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        Status::from_bool(blackboard.has_key(&self.key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Less,
    LessOrEqual,
    Equal,
    Greater,
    GreaterOrEqual,
}

impl CompareOp {
    fn eval<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            CompareOp::Less => lhs < rhs,
            CompareOp::LessOrEqual => lhs <= rhs,
            CompareOp::Equal => lhs == rhs,
            CompareOp::Greater => lhs > rhs,
            CompareOp::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// Equality check against a stored flag. An unwritten key reads as `false`,
/// so comparing against `false` succeeds on a fresh blackboard.
pub struct CompareBool {
    key: String,
    expected: bool,
}

impl CompareBool {
    pub fn new(key: impl Into<String>, expected: bool) -> Self {
        Self {
            key: key.into(),
            expected,
        }
    }
}

impl BehaviorNode for CompareBool {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        Status::from_bool(blackboard.read(&self.key, false) == self.expected)
    }
}

/// Ordered comparison of a stored integer against a constant. An unwritten
/// key compares through the type default (0), not as an automatic Failure.
pub struct CompareInt {
    key: String,
    op: CompareOp,
    rhs: i32,
}

impl CompareInt {
    pub fn new(key: impl Into<String>, op: CompareOp, rhs: i32) -> Self {
        Self {
            key: key.into(),
            op,
            rhs,
        }
    }
}

impl BehaviorNode for CompareInt {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        Status::from_bool(self.op.eval(blackboard.read(&self.key, 0), self.rhs))
    }
}

/// Ordered comparison of a stored float against a constant; unwritten keys
/// compare as 0.0.
pub struct CompareFloat {
    key: String,
    op: CompareOp,
    rhs: f32,
}

impl CompareFloat {
    pub fn new(key: impl Into<String>, op: CompareOp, rhs: f32) -> Self {
        Self {
            key: key.into(),
            op,
            rhs,
        }
    }
}

impl BehaviorNode for CompareFloat {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        Status::from_bool(self.op.eval(blackboard.read(&self.key, 0.0), self.rhs))
    }
}

/// Fires an event through the context's channel. Always succeeds.
pub struct TriggerEvent {
    id: EventId,
    payload: Option<ContextValue>,
}

impl TriggerEvent {
    pub fn new(id: EventId) -> Self {
        Self { id, payload: None }
    }

    pub fn with_payload(mut self, payload: impl ContextPayload) -> Self {
        self.payload = Some(payload.into_value());
        self
    }
}

impl BehaviorNode for TriggerEvent {
    fn tick(&mut self, _ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        blackboard.trigger_event(self.id, self.payload);
        Status::Success
    }
}
