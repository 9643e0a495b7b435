use std::sync::Arc;

use crate::model::{Creature, CreatureAttributes, CreatureGenerator, RecordGenerator};
use crate::mvi::{MviError, Outcome, Reducer};

use super::result::AddCreatureResult;
use super::state::AddCreatureViewState;

/// Reducer for the creation screen.
///
/// Every accepted field update regenerates the whole creature from the
/// complete attribute set, so the derived values never lag behind a field.
pub struct AddCreatureReducer {
    generator: Arc<dyn RecordGenerator>,
}

impl AddCreatureReducer {
    pub fn new(generator: Arc<dyn RecordGenerator>) -> Self {
        Self { generator }
    }

    fn regenerate(&self, attributes: CreatureAttributes, name: &str, avatar: u32) -> Creature {
        self.generator.generate(attributes, name, avatar)
    }

    fn pending(state: AddCreatureViewState) -> AddCreatureViewState {
        AddCreatureViewState {
            is_processing: true,
            error: None,
            ..state
        }
    }

    fn failed(state: AddCreatureViewState, error: MviError) -> AddCreatureViewState {
        AddCreatureViewState {
            is_processing: false,
            error: Some(error),
            ..state
        }
    }

    fn updated(state: AddCreatureViewState, creature: Creature) -> AddCreatureViewState {
        AddCreatureViewState {
            is_processing: false,
            error: None,
            creature,
            ..state
        }
    }

    fn reduce_attribute(
        &self,
        state: AddCreatureViewState,
        outcome: Outcome<u32>,
        apply: fn(&mut CreatureAttributes, u32),
    ) -> AddCreatureViewState {
        match outcome {
            Outcome::Pending => Self::pending(state),
            Outcome::Success(value) => {
                let mut attributes = state.creature.attributes;
                apply(&mut attributes, value);
                let creature = self.regenerate(attributes, &state.creature.name, state.creature.avatar);
                Self::updated(state, creature)
            }
            Outcome::Failure(error) => Self::failed(state, error),
        }
    }
}

impl Default for AddCreatureReducer {
    fn default() -> Self {
        Self::new(Arc::new(CreatureGenerator))
    }
}

impl Reducer for AddCreatureReducer {
    type State = AddCreatureViewState;
    type Result = AddCreatureResult;

    fn initial(&self) -> Self::State {
        AddCreatureViewState {
            creature: self.regenerate(CreatureAttributes::default(), "", 0),
            ..Default::default()
        }
    }

    fn reduce(&self, state: Self::State, result: Self::Result) -> Self::State {
        match result {
            AddCreatureResult::Avatar(outcome) => match outcome {
                Outcome::Pending => Self::pending(state),
                Outcome::Success(avatar) => {
                    let creature =
                        self.regenerate(state.creature.attributes, &state.creature.name, avatar);
                    AddCreatureViewState {
                        is_avatar_selected: avatar != 0,
                        ..Self::updated(state, creature)
                    }
                }
                Outcome::Failure(error) => Self::failed(state, error),
            },
            AddCreatureResult::Name(outcome) => match outcome {
                Outcome::Pending => Self::pending(state),
                Outcome::Success(name) => {
                    let creature =
                        self.regenerate(state.creature.attributes, &name, state.creature.avatar);
                    Self::updated(state, creature)
                }
                Outcome::Failure(error) => Self::failed(state, error),
            },
            AddCreatureResult::Intelligence(outcome) => {
                self.reduce_attribute(state, outcome, |attributes, value| {
                    attributes.intelligence = value
                })
            }
            AddCreatureResult::Strength(outcome) => {
                self.reduce_attribute(state, outcome, |attributes, value| attributes.strength = value)
            }
            AddCreatureResult::Endurance(outcome) => {
                self.reduce_attribute(state, outcome, |attributes, value| attributes.endurance = value)
            }
            AddCreatureResult::Save(outcome) => match outcome {
                Outcome::Pending => Self::pending(state),
                Outcome::Success(_) => AddCreatureViewState {
                    is_processing: false,
                    is_save_complete: true,
                    error: None,
                    ..state
                },
                Outcome::Failure(error) => Self::failed(state, error),
            },
        }
    }

    fn reduce_unrouted(&self, state: Self::State, error: MviError) -> Self::State {
        Self::failed(state, error)
    }
}
