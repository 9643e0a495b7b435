//! Dispatchers for the creation screen.
//!
//! Field dispatchers resolve their input on the foreground task. Only the
//! save dispatcher touches the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::CreatureRepository;
use crate::model::{AttributeKind, AttributeLookup, Creature, CreatureAttributes, RecordGenerator};
use crate::mvi::{ActionProcessor, Dispatcher, EffectContext, MviError};

use super::action::{AddCreatureAction, AddCreatureActionKind};
use super::result::AddCreatureResult;

fn mismatch(dispatcher: &str, action: &AddCreatureAction) -> MviError {
    MviError::new(format!("{} dispatcher received {:?}", dispatcher, action))
}

pub struct AvatarDispatcher;

#[async_trait]
impl Dispatcher<AddCreatureAction> for AvatarDispatcher {
    type Value = u32;

    fn name(&self) -> &'static str {
        "avatar"
    }

    async fn execute(&self, action: AddCreatureAction) -> Result<u32, MviError> {
        match action {
            AddCreatureAction::Avatar { avatar } => Ok(avatar),
            other => Err(mismatch(self.name(), &other)),
        }
    }
}

pub struct NameDispatcher;

#[async_trait]
impl Dispatcher<AddCreatureAction> for NameDispatcher {
    type Value = String;

    fn name(&self) -> &'static str {
        "name"
    }

    async fn execute(&self, action: AddCreatureAction) -> Result<String, MviError> {
        match action {
            AddCreatureAction::Name { name } => Ok(name),
            other => Err(mismatch(self.name(), &other)),
        }
    }
}

/// Resolves a selected level index into its attribute value.
pub struct AttributeDispatcher {
    kind: AttributeKind,
    lookup: Arc<dyn AttributeLookup>,
}

impl AttributeDispatcher {
    pub fn new(kind: AttributeKind, lookup: Arc<dyn AttributeLookup>) -> Self {
        Self { kind, lookup }
    }
}

#[async_trait]
impl Dispatcher<AddCreatureAction> for AttributeDispatcher {
    type Value = u32;

    fn name(&self) -> &'static str {
        self.kind.label()
    }

    async fn execute(&self, action: AddCreatureAction) -> Result<u32, MviError> {
        let index = match (self.kind, &action) {
            (AttributeKind::Intelligence, AddCreatureAction::Intelligence { index })
            | (AttributeKind::Strength, AddCreatureAction::Strength { index })
            | (AttributeKind::Endurance, AddCreatureAction::Endurance { index }) => *index,
            _ => return Err(mismatch(self.name(), &action)),
        };
        self.lookup
            .value(self.kind, index)
            .map_err(|err| MviError::from_error(&err))
    }
}

/// Builds the creature from the action's own fields and stores it.
pub struct SaveDispatcher {
    repository: Arc<dyn CreatureRepository>,
    generator: Arc<dyn RecordGenerator>,
    lookup: Arc<dyn AttributeLookup>,
}

impl SaveDispatcher {
    pub fn new(
        repository: Arc<dyn CreatureRepository>,
        generator: Arc<dyn RecordGenerator>,
        lookup: Arc<dyn AttributeLookup>,
    ) -> Self {
        Self {
            repository,
            generator,
            lookup,
        }
    }

    fn build(
        &self,
        avatar: u32,
        name: &str,
        intelligence: usize,
        strength: usize,
        endurance: usize,
    ) -> Result<Creature, MviError> {
        let resolve = |kind, index| {
            self.lookup
                .value(kind, index)
                .map_err(|err| MviError::from_error(&err))
        };
        let attributes = CreatureAttributes::new(
            resolve(AttributeKind::Intelligence, intelligence)?,
            resolve(AttributeKind::Strength, strength)?,
            resolve(AttributeKind::Endurance, endurance)?,
        );
        Ok(self.generator.generate(attributes, name, avatar))
    }
}

#[async_trait]
impl Dispatcher<AddCreatureAction> for SaveDispatcher {
    type Value = Creature;

    fn name(&self) -> &'static str {
        "save"
    }

    async fn execute(&self, action: AddCreatureAction) -> Result<Creature, MviError> {
        let creature = match &action {
            AddCreatureAction::Save {
                avatar,
                name,
                intelligence,
                strength,
                endurance,
            } => self.build(*avatar, name, *intelligence, *strength, *endurance)?,
            _ => return Err(mismatch(self.name(), &action)),
        };
        self.repository.save(creature.clone()).await?;
        tracing::info!(
            repository = self.repository.name(),
            name = %creature.name,
            hit_points = creature.hit_points,
            "Saved creature"
        );
        Ok(creature)
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// Dispatch table for every creation screen action kind.
pub fn add_creature_processor(
    repository: Arc<dyn CreatureRepository>,
    generator: Arc<dyn RecordGenerator>,
    lookup: Arc<dyn AttributeLookup>,
    effects: EffectContext,
) -> ActionProcessor<AddCreatureAction, AddCreatureResult> {
    ActionProcessor::new(effects)
        .route(AddCreatureActionKind::Avatar, AvatarDispatcher, AddCreatureResult::Avatar)
        .route(AddCreatureActionKind::Name, NameDispatcher, AddCreatureResult::Name)
        .route(
            AddCreatureActionKind::Intelligence,
            AttributeDispatcher::new(AttributeKind::Intelligence, Arc::clone(&lookup)),
            AddCreatureResult::Intelligence,
        )
        .route(
            AddCreatureActionKind::Strength,
            AttributeDispatcher::new(AttributeKind::Strength, Arc::clone(&lookup)),
            AddCreatureResult::Strength,
        )
        .route(
            AddCreatureActionKind::Endurance,
            AttributeDispatcher::new(AttributeKind::Endurance, Arc::clone(&lookup)),
            AddCreatureResult::Endurance,
        )
        .route(
            AddCreatureActionKind::Save,
            SaveDispatcher::new(repository, generator, lookup),
            AddCreatureResult::Save,
        )
}
