//! Reducer trait for MVI architecture.

use super::error::MviError;
use super::state::ViewState;

/// Reducer folds results into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Result) -> State
pub trait Reducer: Send + 'static {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The result union this reducer consumes.
    type Result: Send + 'static;

    /// Seed state for the fold.
    fn initial(&self) -> Self::State {
        Self::State::default()
    }

    /// Process a result and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: Self::State, result: Self::Result) -> Self::State;

    /// Fold an action that had no route into the state.
    ///
    /// Called instead of [`Reducer::reduce`] when the pipeline recovers from
    /// an unknown action kind. The error must end up visible in the state.
    fn reduce_unrouted(&self, state: Self::State, error: MviError) -> Self::State;

    /// Fold a whole result sequence starting from [`Reducer::initial`].
    fn replay<I>(&self, results: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Result>,
    {
        results
            .into_iter()
            .fold(self.initial(), |state, result| self.reduce(state, result))
    }
}
