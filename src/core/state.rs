//! The State trait for values owned by a store.
//!
//! A store never patches its state in place. Every dispatch produces a
//! complete replacement value, so states only need to be cloneable and
//! comparable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for store states.
///
/// Implemented automatically for every type that meets the bounds, so a
/// plain `#[derive]` is all a state type needs.
///
/// # Required Traits
///
/// - `Clone`: history records keep copies of past states
/// - `PartialEq`: dispatch reports whether the state actually changed
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states and history can be inspected as data
/// - `Send` + `Sync`: a store handle may be shared across threads
///
/// # Example
///
/// ```rust
/// use tally::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Cart {
///     items: Vec<String>,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Cart>();
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> State for T where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
    struct TestState {
        count: i64,
        label: String,
    }

    fn assert_state<S: State>(_state: &S) {}

    #[test]
    fn derived_types_are_states() {
        assert_state(&TestState::default());
        assert_state(&0u32);
        assert_state(&vec![String::from("a")]);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState {
            count: 3,
            label: "three".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState {
            count: 1,
            label: String::new(),
        };
        let state2 = state1.clone();
        let state3 = TestState {
            count: 2,
            label: String::new(),
        };

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
