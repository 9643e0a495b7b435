//! Creature storage in a JSON file.
//!
//! The whole collection lives in one JSON array. Every operation runs on the
//! blocking pool and holds an advisory lock on the file for its duration, so
//! concurrent saves from the same process never interleave their writes.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;

use crate::model::Creature;

use super::repository::{CreatureRepository, RepositoryError};

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&Path) -> Result<T, RepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || op(&path))
            .await
            .map_err(|err| RepositoryError::Task(err.to_string()))?
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> RepositoryError + '_ {
    move |source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn open_for_write(path: &Path) -> Result<File, RepositoryError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(path))?;
    }
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(io_error(path))?;
    FileExt::lock_exclusive(&file).map_err(io_error(path))?;
    Ok(file)
}

fn read_creatures(file: &mut File, path: &Path) -> Result<Vec<Creature>, RepositoryError> {
    let mut content = String::new();
    file.seek(SeekFrom::Start(0)).map_err(io_error(path))?;
    file.read_to_string(&mut content).map_err(io_error(path))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|source| RepositoryError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_creatures(file: &mut File, path: &Path, creatures: &[Creature]) -> Result<(), RepositoryError> {
    let json = serde_json::to_vec_pretty(creatures).map_err(RepositoryError::Encode)?;
    file.set_len(0).map_err(io_error(path))?;
    file.seek(SeekFrom::Start(0)).map_err(io_error(path))?;
    file.write_all(&json).map_err(io_error(path))?;
    file.sync_all().map_err(io_error(path))
}

#[async_trait]
impl CreatureRepository for JsonFileRepository {
    fn name(&self) -> &'static str {
        "json"
    }

    async fn list(&self) -> Result<Vec<Creature>, RepositoryError> {
        self.blocking(|path| {
            if !path.exists() {
                return Ok(Vec::new());
            }
            let mut file = File::open(path).map_err(io_error(path))?;
            FileExt::lock_shared(&file).map_err(io_error(path))?;
            read_creatures(&mut file, path)
        })
        .await
    }

    async fn save(&self, creature: Creature) -> Result<(), RepositoryError> {
        self.blocking(move |path| {
            let mut file = open_for_write(path)?;
            let mut creatures = read_creatures(&mut file, path)?;
            creatures.push(creature);
            write_creatures(&mut file, path, &creatures)?;
            tracing::debug!(path = %path.display(), count = creatures.len(), "Saved creature");
            Ok(())
        })
        .await
    }

    async fn clear_all(&self) -> Result<(), RepositoryError> {
        self.blocking(|path| {
            let mut file = open_for_write(path)?;
            write_creatures(&mut file, path, &[])
        })
        .await
    }
}
