//! Shared test utilities and a scripted repository fake.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use creaturemon::data::{CreatureRepository, RepositoryError};
use creaturemon::model::{Creature, CreatureAttributes, CreatureGenerator, RecordGenerator};
use creaturemon::mvi::{StateSubscription, ViewState};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Semaphore;

/// Upper bound for any single wait in these tests.
pub const TIMEOUT: Duration = Duration::from_secs(2);

/// Build a creature the way the default generator would.
pub fn creature(name: &str, attributes: (u32, u32, u32), avatar: u32) -> Creature {
    let (intelligence, strength, endurance) = attributes;
    CreatureGenerator.generate(
        CreatureAttributes::new(intelligence, strength, endurance),
        name,
        avatar,
    )
}

/// Wait for the first state matching `predicate`, failing the test on timeout
/// or when the subscription ends first.
pub async fn wait_for<S, F>(subscription: &mut StateSubscription<S>, predicate: F) -> S
where
    S: ViewState,
    F: FnMut(&S) -> bool,
{
    tokio::time::timeout(TIMEOUT, subscription.wait_for(predicate))
        .await
        .expect("Timed out waiting for state")
        .expect("State stream ended before a matching state")
}

/// Collect every state emitted until the subscription ends.
pub async fn collect_until_closed<S: ViewState>(subscription: &mut StateSubscription<S>) -> Vec<S> {
    let mut states = Vec::new();
    loop {
        match tokio::time::timeout(TIMEOUT, subscription.next()).await {
            Ok(Some(state)) => states.push(state),
            Ok(None) => return states,
            Err(_) => panic!("Timed out waiting for the state stream to end"),
        }
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Repository fake with call counters and scripted responses.
///
/// `list()` can be gated: a gated fake blocks every `list()` call until
/// [`FakeRepository::release`] is called once per call.
pub struct FakeRepository {
    creatures: Mutex<Vec<Creature>>,
    list_error: Mutex<Option<String>>,
    save_error: Mutex<Option<String>>,
    list_calls: AtomicUsize,
    save_calls: AtomicUsize,
    clear_calls: AtomicUsize,
    saved: Mutex<Vec<Creature>>,
    gate: Option<Semaphore>,
}

impl FakeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(Vec::new(), None))
    }

    pub fn with_creatures(creatures: Vec<Creature>) -> Arc<Self> {
        Arc::new(Self::build(creatures, None))
    }

    pub fn gated(creatures: Vec<Creature>) -> Arc<Self> {
        Arc::new(Self::build(creatures, Some(Semaphore::new(0))))
    }

    fn build(creatures: Vec<Creature>, gate: Option<Semaphore>) -> Self {
        Self {
            creatures: Mutex::new(creatures),
            list_error: Mutex::new(None),
            save_error: Mutex::new(None),
            list_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            clear_calls: AtomicUsize::new(0),
            saved: Mutex::new(Vec::new()),
            gate,
        }
    }

    pub fn fail_list(&self, message: &str) {
        *self.list_error.lock() = Some(message.to_string());
    }

    pub fn fail_save(&self, message: &str) {
        *self.save_error.lock() = Some(message.to_string());
    }

    /// Let one gated `list()` call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Vec<Creature> {
        self.saved.lock().clone()
    }
}

#[async_trait]
impl CreatureRepository for FakeRepository {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn list(&self) -> Result<Vec<Creature>, RepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| RepositoryError::Unavailable(e.to_string()))?
                .forget();
        }
        if let Some(message) = self.list_error.lock().clone() {
            return Err(RepositoryError::Unavailable(message));
        }
        Ok(self.creatures.lock().clone())
    }

    async fn save(&self, creature: Creature) -> Result<(), RepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.save_error.lock().clone() {
            return Err(RepositoryError::Unavailable(message));
        }
        self.saved.lock().push(creature.clone());
        self.creatures.lock().push(creature);
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), RepositoryError> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        self.creatures.lock().clear();
        Ok(())
    }
}
