//! Finite-state-machine evaluator built on `agent-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod machine;
pub mod state;

pub use machine::StateMachine;
pub use state::{State, StateId};
