//! Zen Garden (workspace facade crate).
//!
//! Re-exports the member crates as `zen_garden::{core,input,term,types}` so the
//! binary, integration tests and benchmarks share one import path.

pub use zen_garden_core as core;
pub use zen_garden_input as input;
pub use zen_garden_term as term;
pub use zen_garden_types as types;
