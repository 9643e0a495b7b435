use crate::model::Creature;
use crate::mvi::{MviError, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddCreatureViewState {
    pub is_processing: bool,
    /// Creature derived from every field accepted so far.
    pub creature: Creature,
    /// Set once a non-zero avatar has been picked.
    pub is_avatar_selected: bool,
    pub is_save_complete: bool,
    pub error: Option<MviError>,
}

impl AddCreatureViewState {
    /// Whether the form holds enough input to be saved.
    pub fn can_save(&self) -> bool {
        self.is_avatar_selected && !self.creature.name.trim().is_empty() && !self.is_processing
    }
}

impl ViewState for AddCreatureViewState {}
