use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCreatureAction {
    Avatar { avatar: u32 },
    Name { name: String },
    Intelligence { index: usize },
    Strength { index: usize },
    Endurance { index: usize },
    Save {
        avatar: u32,
        name: String,
        intelligence: usize,
        strength: usize,
        endurance: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddCreatureActionKind {
    Avatar,
    Name,
    Intelligence,
    Strength,
    Endurance,
    Save,
}

impl AddCreatureActionKind {
    pub const ALL: [AddCreatureActionKind; 6] = [
        AddCreatureActionKind::Avatar,
        AddCreatureActionKind::Name,
        AddCreatureActionKind::Intelligence,
        AddCreatureActionKind::Strength,
        AddCreatureActionKind::Endurance,
        AddCreatureActionKind::Save,
    ];
}

impl Action for AddCreatureAction {
    type Kind = AddCreatureActionKind;

    fn kind(&self) -> AddCreatureActionKind {
        match self {
            Self::Avatar { .. } => AddCreatureActionKind::Avatar,
            Self::Name { .. } => AddCreatureActionKind::Name,
            Self::Intelligence { .. } => AddCreatureActionKind::Intelligence,
            Self::Strength { .. } => AddCreatureActionKind::Strength,
            Self::Endurance { .. } => AddCreatureActionKind::Endurance,
            Self::Save { .. } => AddCreatureActionKind::Save,
        }
    }
}
