use crate::mvi::Intent;

use super::action::AddCreatureAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCreatureIntent {
    /// User picked an avatar.
    Avatar { avatar: u32 },
    /// User edited the name field.
    Name { name: String },
    /// Selected index in the intelligence level list.
    Intelligence { index: usize },
    /// Selected index in the strength level list.
    Strength { index: usize },
    /// Selected index in the endurance level list.
    Endurance { index: usize },
    /// User tapped save. Carries every field shown on screen.
    Save {
        avatar: u32,
        name: String,
        intelligence: usize,
        strength: usize,
        endurance: usize,
    },
}

impl Intent for AddCreatureIntent {
    type Action = AddCreatureAction;

    fn into_action(self) -> AddCreatureAction {
        match self {
            Self::Avatar { avatar } => AddCreatureAction::Avatar { avatar },
            Self::Name { name } => AddCreatureAction::Name { name },
            Self::Intelligence { index } => AddCreatureAction::Intelligence { index },
            Self::Strength { index } => AddCreatureAction::Strength { index },
            Self::Endurance { index } => AddCreatureAction::Endurance { index },
            Self::Save {
                avatar,
                name,
                intelligence,
                strength,
                endurance,
            } => AddCreatureAction::Save {
                avatar,
                name,
                intelligence,
                strength,
                endurance,
            },
        }
    }
}
