use std::cell::RefCell;
use std::rc::Rc;

use agent_core::{AgentContext, ContextValue, EventId, TickContext};

use crate::bt::{BehaviorNode, Status};

type Subscriber = Box<dyn FnMut(EventId, Option<ContextValue>)>;

/// Owns one root node and one [`AgentContext`], evaluating the root once
/// per host tick.
///
/// The tree claims the context's single event-handler slot at construction
/// and fans every triggered event out to its own subscribers, in
/// registration order, synchronously. Subscribers must not trigger further
/// events from inside their handler. Evaluation is single-threaded by
/// construction, which is why the fan-out list is `Rc`-shared rather than
/// locked.
pub struct BehaviorTree {
    root: Box<dyn BehaviorNode>,
    context: AgentContext,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
    last: Status,
}

impl BehaviorTree {
    pub fn new(root: Box<dyn BehaviorNode>) -> Self {
        let subscribers: Rc<RefCell<Vec<Subscriber>>> = Rc::default();

        let mut context = AgentContext::new();
        let fan_out = Rc::clone(&subscribers);
        context.on_event(move |id, payload| {
            for subscriber in fan_out.borrow_mut().iter_mut() {
                subscriber(id, payload);
            }
        });

        Self {
            root,
            context,
            subscribers,
            last: Status::Running,
        }
    }

    /// Evaluates the root once. The tree records the result but imposes no
    /// meaning on it; interpretation belongs to the host.
    pub fn tick(&mut self, ctx: &TickContext) -> Status {
        self.last = self.root.tick(ctx, &mut self.context);
        self.last
    }

    pub fn last_status(&self) -> Status {
        self.last
    }

    /// Swaps the root without recreating the context, so accumulated
    /// blackboard facts survive reconfiguration.
    pub fn set_root(&mut self, root: Box<dyn BehaviorNode>) {
        self.root = root;
    }

    /// Registers an external observer for in-tree events.
    pub fn subscribe(&mut self, subscriber: impl FnMut(EventId, Option<ContextValue>) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AgentContext {
        &mut self.context
    }
}
