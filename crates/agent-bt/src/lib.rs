//! Behaviour tree runtime built on `agent-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod leaves;
pub mod nodes;
pub mod tree;

pub use bt::{BehaviorNode, Status};
pub use leaves::{
    CompareBool, CompareFloat, CompareInt, CompareOp, HasFlag, SetFlag, SetVariable, TriggerEvent,
};
pub use nodes::{Action, Always, Condition, Delay, Inverter, Selector, Sequence};
pub use tree::BehaviorTree;
