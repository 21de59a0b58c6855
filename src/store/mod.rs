//! The store: shared state, synchronous dispatch and ordered subscriptions.
//!
//! This is the stateful shell around the pure core. It owns the only
//! mutable state in the crate and is the only place user callbacks run.
//!
//! # Notification rules
//!
//! - Subscribers are called after every successful dispatch, in the order
//!   they subscribed, once each.
//! - The state is fully replaced before the first subscriber runs.
//! - Subscribers added during a round wait for the next dispatch.
//! - Subscribers removed during a round are not called again, including
//!   later in that same round.
//! - A panicking subscriber is handled by the store's [`NotifyPolicy`].

mod error;
#[allow(clippy::module_inception)]
mod store;
mod subscription;

pub use error::{DispatchError, NotifyPolicy, SubscriberFailure};
pub use store::{DispatchReport, Store};
pub use subscription::{Subscription, SubscriptionId};
