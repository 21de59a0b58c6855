//! Subscriber registry and unsubscribe handles.

use parking_lot::{Mutex, ReentrantMutex};
use std::fmt;
use std::sync::{Arc, Weak};

/// Zero-argument change callback.
pub(crate) type Subscriber = Arc<dyn Fn() + Send + Sync>;

/// Lock held for a whole dispatch, notification round included.
pub(crate) type DispatchLock = ReentrantMutex<()>;

/// Identifier of one registration, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered collection of subscribers.
///
/// Ids are handed out in increasing order and removal keeps the remaining
/// entries in place, so the list stays sorted by id and matches
/// registration order.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    entries: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl SubscriberRegistry {
    pub(crate) fn insert(&mut self, callback: Subscriber) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_active(&self, id: SubscriptionId) -> bool {
        self.position(id).is_some()
    }

    /// Copy of the current entries, used as one notification round.
    pub(crate) fn snapshot(&self) -> Vec<(SubscriptionId, Subscriber)> {
        self.entries.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, id: SubscriptionId) -> Option<usize> {
        self.entries
            .binary_search_by_key(&id, |(entry_id, _)| *entry_id)
            .ok()
    }
}

/// Handle returned by `Store::subscribe`.
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
/// The handle holds no strong reference to the store.
#[derive(Clone)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<Mutex<SubscriberRegistry>>,
    dispatch_lock: Weak<DispatchLock>,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriptionId,
        registry: &Arc<Mutex<SubscriberRegistry>>,
        dispatch_lock: &Arc<DispatchLock>,
    ) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
            dispatch_lock: Arc::downgrade(dispatch_lock),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove this registration.
    ///
    /// Returns `true` on the first effective removal. Later calls, or calls
    /// after the store has been dropped, are no-ops returning `false`.
    ///
    /// Called from another thread while a dispatch is running, this waits
    /// for that dispatch to finish, so once it returns the callback is never
    /// invoked again. On the dispatching thread (from inside a subscriber)
    /// it takes effect immediately. A subscriber must not block on another
    /// thread that is unsubscribing from the same store.
    pub fn unsubscribe(&self) -> bool {
        let (Some(registry), Some(dispatch_lock)) =
            (self.registry.upgrade(), self.dispatch_lock.upgrade())
        else {
            return false;
        };
        let _serial = dispatch_lock.lock();
        let removed = registry.lock().remove(self.id);
        if removed {
            tracing::trace!(subscription = %self.id, "unsubscribed");
        }
        removed
    }

    /// Whether the callback will still be notified.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.lock().is_active(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
