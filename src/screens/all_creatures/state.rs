use crate::model::Creature;
use crate::mvi::{MviError, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllCreaturesViewState {
    pub is_loading: bool,
    pub creatures: Vec<Creature>,
    /// Last failure; cleared by the next pending or successful result.
    pub error: Option<MviError>,
}

impl ViewState for AllCreaturesViewState {}
