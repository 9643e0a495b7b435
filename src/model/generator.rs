use super::creature::{Creature, CreatureAttributes};

/// Builds a creature record from its input fields.
///
/// Implementations must be deterministic and free of side effects: the same
/// inputs always produce the same creature.
pub trait RecordGenerator: Send + Sync + 'static {
    fn generate(&self, attributes: CreatureAttributes, name: &str, avatar: u32) -> Creature;
}

/// Default generator: hit points are a weighted sum of the attributes,
/// saturating at `u32::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreatureGenerator;

const INTELLIGENCE_WEIGHT: u32 = 5;
const STRENGTH_WEIGHT: u32 = 3;
const ENDURANCE_WEIGHT: u32 = 4;

impl RecordGenerator for CreatureGenerator {
    fn generate(&self, attributes: CreatureAttributes, name: &str, avatar: u32) -> Creature {
        let hit_points = INTELLIGENCE_WEIGHT
            .saturating_mul(attributes.intelligence)
            .saturating_add(STRENGTH_WEIGHT.saturating_mul(attributes.strength))
            .saturating_add(ENDURANCE_WEIGHT.saturating_mul(attributes.endurance));
        Creature {
            attributes,
            hit_points,
            name: name.to_string(),
            avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_points_are_weighted_sum() {
        let creature = CreatureGenerator.generate(CreatureAttributes::new(3, 7, 10), "Rex", 7);
        assert_eq!(creature.hit_points, 5 * 3 + 3 * 7 + 4 * 10);
        assert_eq!(creature.name, "Rex");
        assert_eq!(creature.avatar, 7);
        assert_eq!(creature.attributes, CreatureAttributes::new(3, 7, 10));
    }

    #[test]
    fn empty_inputs_generate_blank_creature() {
        let creature = CreatureGenerator.generate(CreatureAttributes::default(), "", 0);
        assert_eq!(creature, Creature::default());
    }

    #[test]
    fn oversized_attributes_saturate() {
        let creature =
            CreatureGenerator.generate(CreatureAttributes::new(u32::MAX, 1, 1), "Titan", 1);
        assert_eq!(creature.hit_points, u32::MAX);

        let creature =
            CreatureGenerator.generate(CreatureAttributes::new(0, u32::MAX / 3, 0), "Ox", 1);
        assert_eq!(creature.hit_points, 3 * (u32::MAX / 3));
    }

    #[test]
    fn generation_is_deterministic() {
        let attributes = CreatureAttributes::new(10, 3, 7);
        assert_eq!(
            CreatureGenerator.generate(attributes, "Blob", 2),
            CreatureGenerator.generate(attributes, "Blob", 2)
        );
    }
}
