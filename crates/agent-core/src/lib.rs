//! Deterministic per-tick decision kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod context;
pub mod event;
pub mod math;
pub mod tick;
pub mod value;

pub use context::AgentContext;
pub use event::EventId;
pub use math::{Color, Vec2, Vec3};
pub use tick::TickContext;
pub use value::{ContextPayload, ContextValue};
