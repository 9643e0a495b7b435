//! Creature records and the pure collaborators that build them.

mod attributes;
mod creature;
mod generator;

pub use attributes::{AttributeError, AttributeKind, AttributeLookup, AttributeStore, AttributeValue};
pub use creature::{Creature, CreatureAttributes};
pub use generator::{CreatureGenerator, RecordGenerator};
