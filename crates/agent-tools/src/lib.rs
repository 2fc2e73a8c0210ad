//! Tooling primitives for the agent decision kernel.
//!
//! This crate is intentionally lightweight and engine-agnostic: dumb-data
//! records of the events a tree emits, plus sinks and an in-memory log that
//! tests and debug overlays can attach to a tree's subscription point.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod log;

pub use log::{EventLog, EventRecord, EventSink, NullEventSink, VecEventSink};
