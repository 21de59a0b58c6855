//! Store construction.
//!
//! `create_store` and `create_store_with` cover the common cases; the
//! [`StoreBuilder`] exposes the remaining knobs (notification policy,
//! dispatch history).

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;

use crate::core::{Action, Reducer, State};
use crate::store::Store;

/// Create a store whose initial state comes from `reducer.init()`.
///
/// # Example
///
/// ```
/// use tally::builder::create_store;
/// use tally::counter::{decrement, increment, CounterReducer};
///
/// let store = create_store(CounterReducer);
/// store.dispatch(increment()).unwrap();
/// store.dispatch(increment()).unwrap();
/// store.dispatch(decrement()).unwrap();
///
/// assert_eq!(store.get_state().count, 1);
/// ```
pub fn create_store<S, A, R>(reducer: R) -> Store<S, A>
where
    S: State,
    A: Action,
    R: Reducer<S, A> + 'static,
{
    Store::new(reducer)
}

/// Create a store starting from an explicit initial state.
///
/// # Example
///
/// ```
/// use tally::builder::create_store_with;
/// use tally::counter::{reset, CounterReducer, CounterState};
///
/// let store = create_store_with(CounterReducer, CounterState { count: 9 });
/// assert_eq!(store.get_state().count, 9);
///
/// store.dispatch(reset()).unwrap();
/// assert_eq!(store.get_state().count, 0);
/// ```
pub fn create_store_with<S, A, R>(reducer: R, initial: S) -> Store<S, A>
where
    S: State,
    A: Action,
    R: Reducer<S, A> + 'static,
{
    Store::with_state(reducer, initial)
}
