use crate::mvi::Intent;

use super::action::AllCreaturesAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllCreaturesIntent {
    /// Screen became visible; load the stored creatures.
    LoadAll,
    /// User asked to delete every creature.
    ClearAll,
}

impl AllCreaturesIntent {
    pub fn is_load(&self) -> bool {
        matches!(self, Self::LoadAll)
    }
}

impl Intent for AllCreaturesIntent {
    type Action = AllCreaturesAction;

    fn into_action(self) -> AllCreaturesAction {
        match self {
            Self::LoadAll => AllCreaturesAction::LoadAll,
            Self::ClearAll => AllCreaturesAction::ClearAll,
        }
    }
}
