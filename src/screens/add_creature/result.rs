use crate::model::Creature;
use crate::mvi::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCreatureResult {
    Avatar(Outcome<u32>),
    Name(Outcome<String>),
    /// Resolved attribute values, not indices.
    Intelligence(Outcome<u32>),
    Strength(Outcome<u32>),
    Endurance(Outcome<u32>),
    /// Success carries the creature handed to the repository.
    Save(Outcome<Creature>),
}
