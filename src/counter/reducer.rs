//! Counter state and reducer.

use super::actions::CounterAction;
use crate::core::Reducer;
use serde::{Deserialize, Serialize};

/// State of the counter store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

/// Reducer for [`CounterAction`]s.
///
/// Seeds at `count: 0`. Arithmetic saturates at the `i64` bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterReducer;

impl Reducer<CounterState, CounterAction> for CounterReducer {
    fn init(&self) -> CounterState {
        CounterState::default()
    }

    fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterAction::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
            CounterAction::Reset => CounterState { count: 0 },
            CounterAction::Unrecognized => *state,
        }
    }
}
