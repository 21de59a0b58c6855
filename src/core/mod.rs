//! Core store types and logic.
//!
//! This module contains the pure part of the store:
//! - State and Action traits
//! - Reducers, the only way a state is ever replaced
//! - Bounded dispatch history
//!
//! Nothing in here performs I/O or holds shared mutable state.

mod action;
mod history;
mod reducer;
mod state;

pub use action::Action;
pub use history::{DispatchHistory, DispatchRecord};
pub use reducer::{reducer_fn, seeded, FnReducer, Reducer};
pub use state::State;
