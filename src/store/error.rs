//! Dispatch errors and subscriber fault policy.

use super::subscription::SubscriptionId;
use std::any::Any;
use thiserror::Error;

/// A subscriber callback that panicked during notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberFailure {
    pub subscription: SubscriptionId,
    pub message: String,
}

/// Errors that can occur while dispatching an action.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("Reducer panicked on action '{action}': {message}")]
    ReducerPanicked { action: String, message: String },

    #[error("Action '{action}' dispatched from inside a reducer")]
    DispatchInReducer { action: String },

    #[error("{} subscriber(s) panicked ({notified} notified)", .failures.len())]
    SubscribersPanicked {
        failures: Vec<SubscriberFailure>,
        notified: usize,
    },

    #[error("Notification aborted by subscriber {} ({skipped} skipped): {}", .failure.subscription, .failure.message)]
    NotificationAborted {
        failure: SubscriberFailure,
        skipped: usize,
    },
}

impl DispatchError {
    /// Whether the reducer's result was committed before the error occurred.
    pub fn state_committed(&self) -> bool {
        matches!(
            self,
            Self::SubscribersPanicked { .. } | Self::NotificationAborted { .. }
        )
    }
}

/// Strategy for handling a subscriber that panics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Log the panic, keep notifying the rest, report all failures afterwards
    #[default]
    Isolate,

    /// Log the panic and skip every remaining subscriber
    Abort,
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
