//! Counter model: the reference domain for the store.
//!
//! A single integer `count`, moved by `INCREMENT`, `DECREMENT` and `RESET`
//! actions. Actions use the `{"type": "..."}` shape on the wire, so action
//! values produced by other layers deserialize directly.

mod actions;
mod reducer;

pub use actions::{decrement, increment, reset, CounterAction};
pub use reducer::{CounterReducer, CounterState};
