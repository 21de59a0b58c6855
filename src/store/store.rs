//! Store that owns state, applies reducers and notifies subscribers.

use super::error::{panic_message, DispatchError, NotifyPolicy, SubscriberFailure};
use super::subscription::{
    DispatchLock, Subscriber, SubscriberRegistry, Subscription, SubscriptionId,
};
use crate::core::{Action, DispatchHistory, DispatchRecord, Reducer, State};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::panic::{self, AssertUnwindSafe};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Outcome of a dispatch whose reducer and subscribers all completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    /// Position of this dispatch in the store's lifetime, starting at 1
    pub sequence: u64,
    /// Whether the reducer returned a state different from the previous one
    pub changed: bool,
    /// Number of subscribers called
    pub notified: usize,
}

struct Shared<S: State, A: Action> {
    reducer: Box<dyn Reducer<S, A>>,
    state: RwLock<Arc<S>>,
    registry: Arc<Mutex<SubscriberRegistry>>,
    history: Mutex<Option<DispatchHistory<S>>>,
    dispatch_lock: Arc<DispatchLock>,
    reducing: AtomicBool,
    sequence: AtomicU64,
    policy: NotifyPolicy,
}

/// Unidirectional state container.
///
/// A store holds the current state, replaces it only with what its reducer
/// returns, and calls every subscriber after each dispatch in the order
/// they subscribed. `Store` is a handle: clones share the same state.
///
/// Each notification round works on a snapshot of the subscriber list taken
/// after the state is replaced. Subscribers added during a round are first
/// called on the next dispatch. Subscribers removed during a round are not
/// called for the rest of it. Unsubscribing from another thread waits for
/// the running dispatch to finish.
///
/// # Example
///
/// ```rust
/// use tally::counter::{increment, CounterReducer};
/// use tally::Store;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let store = Store::new(CounterReducer);
/// let calls = Arc::new(AtomicUsize::new(0));
///
/// let seen = Arc::clone(&calls);
/// let subscription = store.subscribe(move || {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// store.dispatch(increment()).unwrap();
/// assert_eq!(store.get_state().count, 1);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
///
/// subscription.unsubscribe();
/// store.dispatch(increment()).unwrap();
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct Store<S: State, A: Action> {
    shared: Arc<Shared<S, A>>,
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store seeded by `reducer.init()`.
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::from_parts(Box::new(reducer), None, NotifyPolicy::default(), None)
    }

    /// Create a store starting from `initial`; the reducer's seed is not used.
    pub fn with_state<R>(reducer: R, initial: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::from_parts(
            Box::new(reducer),
            Some(initial),
            NotifyPolicy::default(),
            None,
        )
    }

    pub(crate) fn from_parts(
        reducer: Box<dyn Reducer<S, A>>,
        initial: Option<S>,
        policy: NotifyPolicy,
        history_capacity: Option<NonZeroUsize>,
    ) -> Self {
        let initial = initial.unwrap_or_else(|| reducer.init());
        tracing::debug!(?initial, ?policy, "store created");

        Self {
            shared: Arc::new(Shared {
                reducer,
                state: RwLock::new(Arc::new(initial)),
                registry: Arc::new(Mutex::new(SubscriberRegistry::default())),
                history: Mutex::new(history_capacity.map(DispatchHistory::new)),
                dispatch_lock: Arc::new(DispatchLock::new(())),
                reducing: AtomicBool::new(false),
                sequence: AtomicU64::new(0),
                policy,
            }),
        }
    }

    /// Current state snapshot.
    ///
    /// The returned `Arc` is immutable; later dispatches replace the store's
    /// state without affecting snapshots already handed out.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&self.shared.state.read())
    }

    /// Apply `action` through the reducer and notify subscribers.
    ///
    /// Runs to completion before returning. Dispatches from other threads
    /// wait; a subscriber may dispatch again on the same thread, in which
    /// case the nested dispatch completes before the outer round continues.
    ///
    /// A panicking reducer leaves the state untouched. A panicking
    /// subscriber is handled according to the store's [`NotifyPolicy`]; the
    /// new state stays committed either way.
    pub fn dispatch(&self, action: A) -> Result<DispatchReport, DispatchError> {
        let shared = &*self.shared;
        let _serial = shared.dispatch_lock.lock();

        if shared.reducing.load(Ordering::Acquire) {
            return Err(DispatchError::DispatchInReducer {
                action: action.kind().to_string(),
            });
        }

        let current = self.get_state();
        shared.reducing.store(true, Ordering::Release);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            shared.reducer.reduce(&current, &action)
        }));
        shared.reducing.store(false, Ordering::Release);

        let next = match outcome {
            Ok(next) => next,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(action = action.kind(), %message, "reducer panicked, state unchanged");
                return Err(DispatchError::ReducerPanicked {
                    action: action.kind().to_string(),
                    message,
                });
            }
        };

        let changed = next != *current;
        let sequence = shared.sequence.fetch_add(1, Ordering::AcqRel) + 1;

        if let Some(history) = shared.history.lock().as_mut() {
            history.record(DispatchRecord {
                sequence,
                action: action.kind().to_string(),
                from: S::clone(&current),
                to: next.clone(),
                timestamp: Utc::now(),
            });
        }

        *shared.state.write() = Arc::new(next);
        tracing::debug!(action = action.kind(), sequence, changed, "state replaced");

        let round = shared.registry.lock().snapshot();
        let notified = self.notify(&round)?;

        Ok(DispatchReport {
            sequence,
            changed,
            notified,
        })
    }

    fn notify(&self, round: &[(SubscriptionId, Subscriber)]) -> Result<usize, DispatchError> {
        let mut notified = 0;
        let mut failures = Vec::new();

        for (position, (id, callback)) in round.iter().enumerate() {
            let active = self.shared.registry.lock().is_active(*id);
            if !active {
                tracing::trace!(subscription = %id, "skipping subscriber removed mid-round");
                continue;
            }

            match panic::catch_unwind(AssertUnwindSafe(|| callback())) {
                Ok(()) => notified += 1,
                Err(payload) => {
                    let failure = SubscriberFailure {
                        subscription: *id,
                        message: panic_message(payload.as_ref()),
                    };
                    tracing::error!(
                        subscription = %id,
                        message = %failure.message,
                        policy = ?self.shared.policy,
                        "subscriber panicked"
                    );

                    match self.shared.policy {
                        NotifyPolicy::Isolate => failures.push(failure),
                        NotifyPolicy::Abort => {
                            let registry = self.shared.registry.lock();
                            let skipped = round[position + 1..]
                                .iter()
                                .filter(|(id, _)| registry.is_active(*id))
                                .count();
                            return Err(DispatchError::NotificationAborted { failure, skipped });
                        }
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(notified)
        } else {
            Err(DispatchError::SubscribersPanicked { failures, notified })
        }
    }

    /// Register a callback to run after every dispatch.
    ///
    /// The callback receives no arguments; it can read the new state through
    /// a clone of the store. A callback that captures its own store keeps
    /// it alive until unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.shared.registry.lock().insert(Arc::new(callback));
        tracing::trace!(subscription = %id, "subscribed");
        Subscription::new(id, &self.shared.registry, &self.shared.dispatch_lock)
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.registry.lock().len()
    }

    /// Copy of the dispatch history, if recording was enabled.
    pub fn history(&self) -> Option<DispatchHistory<S>> {
        self.shared.history.lock().clone()
    }

    pub fn notify_policy(&self) -> NotifyPolicy {
        self.shared.policy
    }
}

impl<S: State, A: Action> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}
