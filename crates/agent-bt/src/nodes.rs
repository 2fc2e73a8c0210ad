use agent_core::{AgentContext, TickContext};

use crate::bt::{BehaviorNode, Status};

/// Ticks children in order until one returns Running or Failure.
///
/// Every tick restarts the scan from the first child; a child left Running
/// does not become a resume point. An empty sequence succeeds vacuously.
pub struct Sequence {
    children: Vec<Box<dyn BehaviorNode>>,
}

impl Sequence {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children }
    }

    /// Authoring-time only; not safe mid-evaluation.
    pub fn push(&mut self, child: Box<dyn BehaviorNode>) {
        self.children.push(child);
    }

    pub fn remove(&mut self, index: usize) -> Box<dyn BehaviorNode> {
        self.children.remove(index)
    }
}

impl BehaviorNode for Sequence {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        for child in self.children.iter_mut() {
            let status = child.tick(ctx, blackboard);
            if status != Status::Success {
                return status;
            }
        }

        Status::Success
    }
}

/// Ticks children in order until one returns Running or Success.
///
/// Same stateless re-scan as [`Sequence`]. An empty selector fails
/// vacuously.
pub struct Selector {
    children: Vec<Box<dyn BehaviorNode>>,
}

impl Selector {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children }
    }

    /// Authoring-time only; not safe mid-evaluation.
    pub fn push(&mut self, child: Box<dyn BehaviorNode>) {
        self.children.push(child);
    }

    pub fn remove(&mut self, index: usize) -> Box<dyn BehaviorNode> {
        self.children.remove(index)
    }
}

impl BehaviorNode for Selector {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        for child in self.children.iter_mut() {
            let status = child.tick(ctx, blackboard);
            if status != Status::Failure {
                return status;
            }
        }

        Status::Failure
    }
}

/// Inverts the wrapped node's result; Running passes through.
pub struct Inverter {
    child: Box<dyn BehaviorNode>,
}

impl Inverter {
    pub fn new(child: Box<dyn BehaviorNode>) -> Self {
        Self { child }
    }
}

impl BehaviorNode for Inverter {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        self.child.tick(ctx, blackboard).invert()
    }
}

/// Gates the wrapped node behind a cooldown.
///
/// While `millis_since(last fire) < delay_ms` the child is not ticked at
/// all and the node reports Failure (or Success with
/// [`with_passthrough`](Self::with_passthrough), for sequences that should
/// keep going past a cooling-down step). Once the cooldown elapses the fire
/// timestamp is stamped to `ctx.now_ms` and the child's result is returned
/// verbatim. The timestamp starts at zero, so the first fire happens as
/// soon as the host clock itself reads at least `delay_ms`.
pub struct Delay {
    child: Box<dyn BehaviorNode>,
    delay_ms: u64,
    passthrough_on_cooldown: bool,
    last_fired_ms: u64,
}

impl Delay {
    pub fn new(child: Box<dyn BehaviorNode>, delay_ms: u64) -> Self {
        Self {
            child,
            delay_ms,
            passthrough_on_cooldown: false,
            last_fired_ms: 0,
        }
    }

    pub fn with_passthrough(mut self, passthrough: bool) -> Self {
        self.passthrough_on_cooldown = passthrough;
        self
    }
}

impl BehaviorNode for Delay {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        if ctx.millis_since(self.last_fired_ms) < self.delay_ms {
            return Status::from_bool(self.passthrough_on_cooldown);
        }

        self.last_fired_ms = ctx.now_ms;
        self.child.tick(ctx, blackboard)
    }
}

/// Unconditional Success. A childless sentinel, useful as a placeholder
/// while authoring or as the tail of a selector.
pub struct Always;

impl BehaviorNode for Always {
    fn tick(&mut self, _ctx: &TickContext, _blackboard: &mut AgentContext) -> Status {
        Status::Success
    }
}

/// Closure-backed condition leaf.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F>
where
    F: FnMut(&TickContext, &AgentContext) -> bool + 'static,
{
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F> BehaviorNode for Condition<F>
where
    F: FnMut(&TickContext, &AgentContext) -> bool + 'static,
{
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        Status::from_bool((self.cond)(ctx, &*blackboard))
    }
}

/// Closure-backed action leaf. The closure may mutate the blackboard and
/// may report Running for work that spans ticks.
pub struct Action<F> {
    act: F,
}

impl<F> Action<F>
where
    F: FnMut(&TickContext, &mut AgentContext) -> Status + 'static,
{
    pub fn new(act: F) -> Self {
        Self { act }
    }
}

impl<F> BehaviorNode for Action<F>
where
    F: FnMut(&TickContext, &mut AgentContext) -> Status + 'static,
{
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut AgentContext) -> Status {
        (self.act)(ctx, blackboard)
    }
}
