//! Owns both screen pipelines and their shared shutdown signal.

use std::sync::Arc;

use crate::config::{Config, ConfigError, StorageBackend};
use crate::data::{CreatureRepository, JsonFileRepository, MemoryRepository};
use crate::model::{AttributeStore, CreatureGenerator};
use crate::mvi::PipelineOptions;
use crate::screens::add_creature::AddCreatureViewModel;
use crate::screens::all_creatures::AllCreaturesViewModel;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};

pub struct Session {
    all_creatures: AllCreaturesViewModel,
    add_creature: AddCreatureViewModel,
    coordinator: ShutdownCoordinator,
}

impl Session {
    /// Start both screen pipelines over `repository`.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(repository: Arc<dyn CreatureRepository>, options: PipelineOptions) -> Self {
        let coordinator = ShutdownCoordinator::new();
        let all_creatures =
            AllCreaturesViewModel::new(Arc::clone(&repository), options, coordinator.handle());
        let add_creature = AddCreatureViewModel::new(
            repository,
            Arc::new(CreatureGenerator),
            Arc::new(AttributeStore),
            options,
            coordinator.handle(),
        );
        tracing::debug!(
            unknown_action = ?options.unknown_action,
            effects = ?options.effects,
            "Session started"
        );

        Self {
            all_creatures,
            add_creature,
            coordinator,
        }
    }

    /// Start a session with the repository backend named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let repository: Arc<dyn CreatureRepository> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryRepository::new()),
            StorageBackend::Json => {
                let path = config.storage.resolved_path().ok_or_else(|| {
                    ConfigError::ValidationError {
                        message: "JSON storage needs a path".to_string(),
                    }
                })?;
                Arc::new(JsonFileRepository::new(path))
            }
        };
        tracing::info!(repository = repository.name(), "Using creature repository");
        Ok(Self::new(repository, config.pipeline))
    }

    pub fn all_creatures(&self) -> &AllCreaturesViewModel {
        &self.all_creatures
    }

    pub fn add_creature(&self) -> &AddCreatureViewModel {
        &self.add_creature
    }

    pub fn phase(&self) -> ShutdownPhase {
        self.coordinator.phase()
    }

    /// Stop accepting intents and wait until both pipelines have reduced
    /// every in-flight effect.
    pub async fn finish(self) {
        let Self {
            all_creatures,
            add_creature,
            coordinator,
        } = self;

        coordinator.advance(ShutdownPhase::Draining);
        tokio::join!(
            all_creatures.into_pipeline().finish(),
            add_creature.into_pipeline().finish()
        );
        coordinator.advance(ShutdownPhase::Complete);
    }

    /// Signal shutdown and wait for both pipeline tasks to stop.
    ///
    /// Background effects already running are not cancelled.
    pub async fn shutdown(self) {
        let Self {
            all_creatures,
            add_creature,
            coordinator,
        } = self;

        coordinator.signal();
        coordinator.advance(ShutdownPhase::Draining);
        tokio::join!(
            all_creatures.into_pipeline().join(),
            add_creature.into_pipeline().join()
        );
        coordinator.advance(ShutdownPhase::Complete);
        tracing::info!("Session shutdown complete");
    }
}
