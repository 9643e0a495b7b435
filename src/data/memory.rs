use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::model::Creature;

use super::repository::{CreatureRepository, RepositoryError};

/// Volatile repository backed by a shared vector.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    creatures: Arc<RwLock<Vec<Creature>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creatures(creatures: Vec<Creature>) -> Self {
        Self {
            creatures: Arc::new(RwLock::new(creatures)),
        }
    }

    pub fn len(&self) -> usize {
        self.creatures.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.read().is_empty()
    }
}

#[async_trait]
impl CreatureRepository for MemoryRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Creature>, RepositoryError> {
        Ok(self.creatures.read().clone())
    }

    async fn save(&self, creature: Creature) -> Result<(), RepositoryError> {
        self.creatures.write().push(creature);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), RepositoryError> {
        self.creatures.write().clear();
        Ok(())
    }
}
