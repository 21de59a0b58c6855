//! Pure reducer functions.
//!
//! A reducer maps the current state and an incoming action to the next
//! state. It must be pure and total: no side effects, no panics, and an
//! action it does not recognize returns the state unchanged.

use super::action::Action;
use super::state::State;
use std::marker::PhantomData;

/// Pure state transition function.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, Reducer};
///
/// #[derive(Debug)]
/// enum Toggle {
///     Flip,
///     Other,
/// }
///
/// impl Action for Toggle {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Flip => "FLIP",
///             Self::Other => "OTHER",
///         }
///     }
/// }
///
/// struct Switch;
///
/// impl Reducer<bool, Toggle> for Switch {
///     fn init(&self) -> bool {
///         false
///     }
///
///     fn reduce(&self, state: &bool, action: &Toggle) -> bool {
///         match action {
///             Toggle::Flip => !state,
///             Toggle::Other => *state,
///         }
///     }
/// }
///
/// let on = Switch.reduce(&Switch.init(), &Toggle::Flip);
/// assert!(on);
/// assert!(Switch.reduce(&on, &Toggle::Other));
/// ```
pub trait Reducer<S: State, A: Action>: Send + Sync {
    /// State produced when the reducer runs with no prior state.
    fn init(&self) -> S;

    /// Compute the next state. Unknown actions must return `state` unchanged.
    fn reduce(&self, state: &S, action: &A) -> S;
}

/// Reducer backed by a closure.
///
/// Built with [`reducer_fn`] (seeded from `S::default()`) or [`seeded`].
pub struct FnReducer<S, A, F> {
    seed: S,
    reduce: F,
    _phantom: PhantomData<fn(&A)>,
}

impl<S, A, F> Reducer<S, A> for FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> S + Send + Sync,
{
    fn init(&self) -> S {
        self.seed.clone()
    }

    fn reduce(&self, state: &S, action: &A) -> S {
        (self.reduce)(state, action)
    }
}

/// Wrap a closure as a reducer whose seed state is `S::default()`.
///
/// # Example
///
/// ```rust
/// use tally::core::{reducer_fn, Action, Reducer};
///
/// #[derive(Debug)]
/// struct Add(i32);
///
/// impl Action for Add {
///     fn kind(&self) -> &str {
///         "ADD"
///     }
/// }
///
/// let sum = reducer_fn(|total: &i32, action: &Add| total + action.0);
/// assert_eq!(sum.init(), 0);
/// assert_eq!(sum.reduce(&2, &Add(3)), 5);
/// ```
pub fn reducer_fn<S, A, F>(reduce: F) -> FnReducer<S, A, F>
where
    S: State + Default,
    A: Action,
    F: Fn(&S, &A) -> S + Send + Sync,
{
    seeded(S::default(), reduce)
}

/// Wrap a closure as a reducer with an explicit seed state.
pub fn seeded<S, A, F>(seed: S, reduce: F) -> FnReducer<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> S + Send + Sync,
{
    FnReducer {
        seed,
        reduce,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestAction {
        Push(u8),
        Pop,
        Noise,
    }

    impl Action for TestAction {
        fn kind(&self) -> &str {
            match self {
                Self::Push(_) => "PUSH",
                Self::Pop => "POP",
                Self::Noise => "NOISE",
            }
        }
    }

    fn stack(state: &Vec<u8>, action: &TestAction) -> Vec<u8> {
        match action {
            TestAction::Push(value) => {
                let mut next = state.clone();
                next.push(*value);
                next
            }
            TestAction::Pop => {
                let mut next = state.clone();
                next.pop();
                next
            }
            TestAction::Noise => state.clone(),
        }
    }

    #[test]
    fn reducer_fn_seeds_with_default() {
        let reducer = reducer_fn(stack);
        assert!(reducer.init().is_empty());
    }

    #[test]
    fn seeded_uses_explicit_seed() {
        let reducer = seeded(vec![9], stack);
        assert_eq!(reducer.init(), vec![9]);
        assert_eq!(reducer.reduce(&reducer.init(), &TestAction::Push(1)), vec![9, 1]);
    }

    #[test]
    fn reduce_does_not_touch_input() {
        let reducer = reducer_fn(stack);
        let state = vec![1, 2];
        let next = reducer.reduce(&state, &TestAction::Pop);

        assert_eq!(state, vec![1, 2]);
        assert_eq!(next, vec![1]);
    }

    #[test]
    fn unknown_action_is_identity() {
        let reducer = reducer_fn(stack);
        let state = vec![4, 5, 6];
        assert_eq!(reducer.reduce(&state, &TestAction::Noise), state);
    }
}
