use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Creature;
use crate::mvi::MviError;

/// Errors that can occur when talking to creature storage.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to access store file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode store file '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode creatures: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(String),

    /// The backend cannot be reached right now. The bundled backends never
    /// raise it; it is for implementations outside this crate that sit in
    /// front of a remote or shared store.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for MviError {
    fn from(error: RepositoryError) -> Self {
        MviError::from_error(&error)
    }
}

/// Persistent creature storage.
///
/// Each call is made at most once per triggering action.
#[async_trait]
pub trait CreatureRepository: Send + Sync {
    /// Returns the name of this repository for logging.
    fn name(&self) -> &'static str;

    /// All stored creatures, in insertion order.
    async fn list(&self) -> Result<Vec<Creature>, RepositoryError>;

    /// Append one creature.
    async fn save(&self, creature: Creature) -> Result<(), RepositoryError>;

    /// Remove every stored creature.
    async fn clear_all(&self) -> Result<(), RepositoryError>;
}
