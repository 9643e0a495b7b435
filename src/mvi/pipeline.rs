//! The running Intent → Action → Result → State loop of one screen.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::shutdown::ShutdownHandle;

use super::error::{MviError, PipelineError};
use super::filter::IntentFilter;
use super::intent::Intent;
use super::processor::{ActionProcessor, EffectMode};
use super::reducer::Reducer;
use super::state::ViewState;
use super::store::{StateStore, StateSubscription};

/// What happens when an action has no route in the processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownActionPolicy {
    /// Fold the error into state, log a warning, keep the pipeline running.
    #[default]
    Recover,
    /// Terminate the pipeline and end every state subscription.
    Fatal,
}

/// Tunables shared by every screen pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    #[serde(default)]
    pub unknown_action: UnknownActionPolicy,
    #[serde(default)]
    pub effects: EffectMode,
}

/// Handle to a running screen pipeline.
///
/// The pipeline starts as soon as it is spawned: the seed state is cached
/// before any observer attaches. Dropping the handle closes the intent
/// source; the task then drains in-flight effects and exits on its own.
pub struct Pipeline<I: Intent, S: ViewState> {
    intents: mpsc::UnboundedSender<I>,
    store: StateStore<S>,
    shutdown: ShutdownHandle,
    task: JoinHandle<()>,
}

impl<I: Intent, S: ViewState> Pipeline<I, S> {
    /// Start the pipeline on the current tokio runtime.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn spawn<Rd, F>(
        filter: F,
        processor: ActionProcessor<I::Action, Rd::Result>,
        reducer: Rd,
        options: PipelineOptions,
        shutdown: ShutdownHandle,
    ) -> Self
    where
        Rd: Reducer<State = S>,
        F: IntentFilter<I>,
    {
        let store = StateStore::new(reducer.initial());
        let (intents, receiver) = mpsc::unbounded_channel();
        let worker = Worker {
            filter,
            processor,
            reducer,
            store: store.clone(),
            policy: options.unknown_action,
            shutdown: shutdown.clone(),
        };
        let task = tokio::spawn(worker.run(receiver));

        Self {
            intents,
            store,
            shutdown,
            task,
        }
    }

    /// Feed one intent into the pipeline.
    ///
    /// # Errors
    /// Returns [`PipelineError::Closed`] once the pipeline task has stopped.
    pub fn process_intent(&self, intent: I) -> Result<(), PipelineError> {
        self.intents.send(intent).map_err(|_| PipelineError::Closed)
    }

    /// Attach an observer. The latest state is available immediately.
    pub fn states(&self) -> StateSubscription<S> {
        self.store.subscribe()
    }

    pub fn current_state(&self) -> S {
        self.store.current()
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    /// Fatal cause that stopped the pipeline, if any.
    pub fn termination(&self) -> Option<PipelineError> {
        self.store.termination()
    }

    /// Stop accepting intents and wait until every in-flight effect has been
    /// reduced.
    pub async fn finish(self) {
        let Self { intents, task, .. } = self;
        drop(intents);
        if let Err(err) = task.await {
            tracing::error!(error = %err, "Pipeline task failed");
        }
    }

    /// Signal shutdown and wait for the pipeline task to stop.
    ///
    /// Background effects already started keep running; their results are
    /// discarded.
    pub async fn shutdown(self) {
        self.shutdown.signal();
        self.join().await;
    }

    /// Wait for the pipeline task to stop without signalling anything.
    pub async fn join(self) {
        if let Err(err) = self.task.await {
            tracing::error!(error = %err, "Pipeline task failed");
        }
    }
}

struct Worker<I: Intent, Rd: Reducer, F> {
    filter: F,
    processor: ActionProcessor<I::Action, Rd::Result>,
    reducer: Rd,
    store: StateStore<Rd::State>,
    policy: UnknownActionPolicy,
    shutdown: ShutdownHandle,
}

impl<I, Rd, F> Worker<I, Rd, F>
where
    I: Intent,
    Rd: Reducer,
    F: IntentFilter<I>,
{
    async fn run(mut self, mut intents: mpsc::UnboundedReceiver<I>) {
        let _close = CloseOnExit(self.store.clone());
        let (results_tx, mut results) = mpsc::unbounded_channel();
        let mut sink = Some(results_tx);
        let mut state = self.store.current();

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.wait() => {
                    tracing::debug!("Pipeline stopping on shutdown signal");
                    break;
                }

                result = results.recv() => {
                    // Only ends once the intent source is gone and every
                    // in-flight effect has delivered its result.
                    let Some(result) = result else {
                        break;
                    };
                    state = self.reducer.reduce(state, result);
                    self.store.publish(state.clone());
                }

                intent = intents.recv(), if sink.is_some() => {
                    let Some(intent) = intent else {
                        tracing::debug!("Intent source closed, draining in-flight effects");
                        sink = None;
                        continue;
                    };
                    if !self.filter.accept(&intent) {
                        continue;
                    }
                    let Some(results_tx) = sink.as_ref() else {
                        continue;
                    };
                    let action = intent.into_action();
                    if let Err(err) = self.processor.process(action, results_tx).await {
                        match self.policy {
                            UnknownActionPolicy::Fatal => {
                                self.store.terminate(err);
                                return;
                            }
                            UnknownActionPolicy::Recover => {
                                tracing::warn!(error = %err, "Action without a route");
                                let error = MviError::from_error(&err);
                                state = self.reducer.reduce_unrouted(state, error);
                                self.store.publish(state.clone());
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Closes the store when the worker stops, including when it unwinds, so
/// observers never wait on a dead pipeline.
struct CloseOnExit<S: ViewState>(StateStore<S>);

impl<S: ViewState> Drop for CloseOnExit<S> {
    fn drop(&mut self) {
        if !self.0.is_closed() {
            tracing::debug!("Pipeline worker stopped, closing state store");
            self.0.close();
        }
    }
}
