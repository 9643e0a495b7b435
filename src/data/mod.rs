//! Creature storage backends.

mod json;
mod memory;
mod repository;

pub use json::JsonFileRepository;
pub use memory::MemoryRepository;
pub use repository::{CreatureRepository, RepositoryError};
