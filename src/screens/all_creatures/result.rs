use crate::model::Creature;
use crate::mvi::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllCreaturesResult {
    LoadAll(Outcome<Vec<Creature>>),
    /// Success carries nothing: the collection is empty afterwards.
    ClearAll(Outcome<()>),
}
