//! The Action trait for values submitted to a store.

use std::fmt::Debug;

/// An intent to change state.
///
/// Actions are immutable and consumed once: `dispatch` takes ownership and
/// hands the reducer a shared reference. The `kind` tag identifies the
/// action in logs and dispatch history.
///
/// # Example
///
/// ```rust
/// use tally::core::Action;
///
/// #[derive(Debug)]
/// enum TodoAction {
///     Add { title: String },
///     Clear,
/// }
///
/// impl Action for TodoAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Add { .. } => "ADD",
///             Self::Clear => "CLEAR",
///         }
///     }
/// }
///
/// let action = TodoAction::Add { title: "write docs".into() };
/// assert_eq!(action.kind(), "ADD");
/// ```
pub trait Action: Debug + Send + Sync + 'static {
    /// Tag naming this action's kind.
    fn kind(&self) -> &str;
}
