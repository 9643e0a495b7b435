use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllCreaturesAction {
    LoadAll,
    ClearAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllCreaturesActionKind {
    LoadAll,
    ClearAll,
}

impl Action for AllCreaturesAction {
    type Kind = AllCreaturesActionKind;

    fn kind(&self) -> AllCreaturesActionKind {
        match self {
            Self::LoadAll => AllCreaturesActionKind::LoadAll,
            Self::ClearAll => AllCreaturesActionKind::ClearAll,
        }
    }
}
