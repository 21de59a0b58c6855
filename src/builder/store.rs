//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Reducer, State};
use crate::store::{NotifyPolicy, Store};
use std::num::NonZeroUsize;

/// Builder for configuring a store with a fluent API.
///
/// # Example
///
/// ```rust
/// use tally::builder::StoreBuilder;
/// use tally::counter::{increment, CounterReducer, CounterState};
/// use tally::NotifyPolicy;
///
/// let store = StoreBuilder::new()
///     .reducer(CounterReducer)
///     .initial(CounterState { count: 10 })
///     .notify_policy(NotifyPolicy::Abort)
///     .history(16)
///     .build()
///     .unwrap();
///
/// store.dispatch(increment()).unwrap();
/// assert_eq!(store.get_state().count, 11);
/// assert_eq!(store.history().unwrap().len(), 1);
/// ```
pub struct StoreBuilder<S: State, A: Action> {
    reducer: Option<Box<dyn Reducer<S, A>>>,
    initial: Option<S>,
    policy: NotifyPolicy,
    history: Option<usize>,
}

impl<S: State, A: Action> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial: None,
            policy: NotifyPolicy::default(),
            history: None,
        }
    }

    /// Set the reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Start from this state instead of the reducer's seed (optional).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Choose how panicking subscribers are handled. Defaults to
    /// [`NotifyPolicy::Isolate`].
    pub fn notify_policy(mut self, policy: NotifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record the last `capacity` dispatches (optional).
    pub fn history(mut self, capacity: usize) -> Self {
        self.history = Some(capacity);
        self
    }

    /// Build the store.
    /// Returns an error if the reducer is missing or the history is empty.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        let history = self
            .history
            .map(|capacity| NonZeroUsize::new(capacity).ok_or(BuildError::ZeroHistoryCapacity))
            .transpose()?;

        Ok(Store::from_parts(
            reducer,
            self.initial,
            self.policy,
            history,
        ))
    }
}

impl<S: State, A: Action> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
