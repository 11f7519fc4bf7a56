//! Transform stages: the contract, typed options and the static registry.
//!
//! A stage maps the accumulated position and the current time to a new position. Stages are
//! built once from their configuration section and never mutated afterwards.

/// Built-in reference stages.
pub mod builtin;
/// Stage trait and per-sample context.
pub mod contract;
/// Typed access to one configuration section.
pub mod options;
/// Type-tag lookup and module resolution.
pub mod registry;
