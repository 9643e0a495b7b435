//! Base trait for intents (user/system triggers) in MVI architecture.

use super::action::Action;

/// An intent represents one user-observable trigger.
///
/// Intents carry only the raw input values of the trigger. Each intent maps
/// one-to-one onto an [`Action`], which is the unit the processor dispatches.
pub trait Intent: Send + 'static {
    /// The action this intent maps to.
    type Action: Action;

    /// Convert the intent into its action.
    fn into_action(self) -> Self::Action;
}
