use serde::{Deserialize, Serialize};

/// The three numeric attributes of a creature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureAttributes {
    pub intelligence: u32,
    pub strength: u32,
    pub endurance: u32,
}

impl CreatureAttributes {
    pub fn new(intelligence: u32, strength: u32, endurance: u32) -> Self {
        Self {
            intelligence,
            strength,
            endurance,
        }
    }
}

/// A generated creature record.
///
/// `hit_points` is derived from `attributes`; build creatures through a
/// [`RecordGenerator`](super::RecordGenerator) to keep them consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub attributes: CreatureAttributes,
    pub hit_points: u32,
    pub name: String,
    /// Avatar identifier; `0` means no avatar was picked.
    pub avatar: u32,
}
