use crate::mvi::{MviError, Outcome, Reducer};

use super::result::AllCreaturesResult;
use super::state::AllCreaturesViewState;

pub struct AllCreaturesReducer;

impl Reducer for AllCreaturesReducer {
    type State = AllCreaturesViewState;
    type Result = AllCreaturesResult;

    fn reduce(&self, state: Self::State, result: Self::Result) -> Self::State {
        match result {
            AllCreaturesResult::LoadAll(outcome) => match outcome {
                Outcome::Pending => AllCreaturesViewState {
                    is_loading: true,
                    error: None,
                    ..state
                },
                Outcome::Success(creatures) => AllCreaturesViewState {
                    is_loading: false,
                    creatures,
                    error: None,
                },
                Outcome::Failure(error) => AllCreaturesViewState {
                    is_loading: false,
                    error: Some(error),
                    ..state
                },
            },
            AllCreaturesResult::ClearAll(outcome) => match outcome {
                Outcome::Pending => AllCreaturesViewState {
                    is_loading: true,
                    error: None,
                    ..state
                },
                Outcome::Success(()) => AllCreaturesViewState {
                    is_loading: false,
                    creatures: Vec::new(),
                    error: None,
                },
                Outcome::Failure(error) => AllCreaturesViewState {
                    is_loading: false,
                    error: Some(error),
                    ..state
                },
            },
        }
    }

    fn reduce_unrouted(&self, state: Self::State, error: MviError) -> Self::State {
        AllCreaturesViewState {
            is_loading: false,
            error: Some(error),
            ..state
        }
    }
}
