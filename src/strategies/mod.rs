// datamask/src/strategies/mod.rs
//! Tree traversal strategies for structured data.
//!
//! All three walk a `serde_json::Value` that the engine has already cloned,
//! so the caller's tree is never touched. Because `Value` is an owned tree,
//! cyclic graphs are unrepresentable and termination is structural.
//!
//! License: MIT OR Apache-2.0

pub(crate) mod allow;
pub(crate) mod auto;
pub(crate) mod mask;
