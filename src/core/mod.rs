//! Core algorithms – spring animation and tab geometry / selection.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Time only advances through explicit `step` calls, so everything here is
//! deterministic under test.

pub mod selection;
pub mod spring;
