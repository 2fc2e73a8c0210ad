//! Umbrella crate that re-exports the `agent-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for hosts embedding the
//! decision kernel.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use agent_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use agent_bt as bt;

#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub use agent_fsm as fsm;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use agent_tools as tools;
