//! Dispatchers for the list screen.

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::CreatureRepository;
use crate::model::Creature;
use crate::mvi::{ActionProcessor, Dispatcher, EffectContext, MviError};

use super::action::{AllCreaturesAction, AllCreaturesActionKind};
use super::result::AllCreaturesResult;

/// Loads every stored creature.
pub struct LoadAllDispatcher {
    repository: Arc<dyn CreatureRepository>,
}

#[async_trait]
impl Dispatcher<AllCreaturesAction> for LoadAllDispatcher {
    type Value = Vec<Creature>;

    fn name(&self) -> &'static str {
        "load_all"
    }

    async fn execute(&self, _action: AllCreaturesAction) -> Result<Vec<Creature>, MviError> {
        let creatures = self.repository.list().await?;
        tracing::debug!(
            repository = self.repository.name(),
            count = creatures.len(),
            "Loaded creatures"
        );
        Ok(creatures)
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// Deletes every stored creature.
pub struct ClearAllDispatcher {
    repository: Arc<dyn CreatureRepository>,
}

#[async_trait]
impl Dispatcher<AllCreaturesAction> for ClearAllDispatcher {
    type Value = ();

    fn name(&self) -> &'static str {
        "clear_all"
    }

    async fn execute(&self, _action: AllCreaturesAction) -> Result<(), MviError> {
        self.repository.clear_all().await?;
        tracing::info!(repository = self.repository.name(), "Cleared all creatures");
        Ok(())
    }

    fn is_async(&self) -> bool {
        true
    }
}

/// Dispatch table for every list screen action kind.
pub fn all_creatures_processor(
    repository: Arc<dyn CreatureRepository>,
    effects: EffectContext,
) -> ActionProcessor<AllCreaturesAction, AllCreaturesResult> {
    ActionProcessor::new(effects)
        .route(
            AllCreaturesActionKind::LoadAll,
            LoadAllDispatcher {
                repository: Arc::clone(&repository),
            },
            AllCreaturesResult::LoadAll,
        )
        .route(
            AllCreaturesActionKind::ClearAll,
            ClearAllDispatcher { repository },
            AllCreaturesResult::ClearAll,
        )
}
