//! Tally: a small unidirectional state store
//!
//! Tally follows the "pure core, imperative shell" split. State changes are
//! computed by pure reducers; the [`Store`] is the thin shell that owns the
//! current state, applies dispatched actions through the reducer and
//! notifies subscribers synchronously.
//!
//! # Core Concepts
//!
//! - **State**: any cloneable, comparable, serializable value
//! - **Action**: a tagged value describing an intended change
//! - **Reducer**: pure `(state, action) -> state`, identity on unknown actions
//! - **Store**: owns state and an ordered subscriber list; read, dispatch,
//!   subscribe
//!
//! # Example
//!
//! ```rust
//! use tally::builder::create_store;
//! use tally::counter::{decrement, increment, reset, CounterReducer};
//! use std::sync::atomic::{AtomicI64, Ordering};
//! use std::sync::Arc;
//!
//! let store = create_store(CounterReducer);
//! let last_seen = Arc::new(AtomicI64::new(0));
//!
//! let reader = store.clone();
//! let sink = Arc::clone(&last_seen);
//! let subscription = store.subscribe(move || {
//!     sink.store(reader.get_state().count, Ordering::SeqCst);
//! });
//!
//! store.dispatch(increment()).unwrap();
//! store.dispatch(increment()).unwrap();
//! store.dispatch(decrement()).unwrap();
//! assert_eq!(last_seen.load(Ordering::SeqCst), 1);
//!
//! store.dispatch(reset()).unwrap();
//! assert_eq!(store.get_state().count, 0);
//!
//! subscription.unsubscribe();
//! ```

pub mod builder;
pub mod core;
pub mod counter;
pub mod store;

// Re-export commonly used types
pub use crate::builder::{create_store, create_store_with, BuildError, StoreBuilder};
pub use crate::core::{Action, DispatchHistory, DispatchRecord, Reducer, State};
pub use crate::store::{DispatchError, DispatchReport, NotifyPolicy, Store, Subscription, SubscriptionId};
