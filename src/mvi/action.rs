//! Base trait for actions in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// An action is the internal unit of dispatch.
///
/// Every action exposes a kind tag. The action processor routes on the tag
/// through its dispatch table, so adding a variant without registering a
/// route for its kind surfaces as an unknown action at runtime.
pub trait Action: Debug + Send + 'static {
    /// Payload-free tag identifying the action's kind.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;
}
