//! Action dispatch table and result merge.
//!
//! The processor owns one route per action kind. A route pairs a
//! [`Dispatcher`] with a `lift` function that embeds the dispatcher's
//! [`Outcome`] into the screen's result union. Every route pushes into the
//! same result sink, which is where the per-kind streams merge back into one.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures_core::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::action::Action;
use super::error::{MviError, PipelineError};
use super::outcome::Outcome;

/// Channel every route pushes its results into.
pub type ResultSink<R> = mpsc::UnboundedSender<R>;

/// Handler for a single action kind.
///
/// Implementations must not panic and must not let errors escape: every
/// failure is returned as `Err` and becomes a `Failure` result.
#[async_trait]
pub trait Dispatcher<A: Send + 'static>: Send + Sync + 'static {
    /// Value carried by the `Success` result.
    type Value: Send + 'static;

    /// Returns the name of this dispatcher for logging.
    fn name(&self) -> &'static str;

    /// Run the action to completion.
    async fn execute(&self, action: A) -> Result<Self::Value, MviError>;

    /// Whether this dispatcher performs a real side effect.
    ///
    /// Async dispatchers run on the background context; the others run
    /// inline on the foreground task. Default is false.
    fn is_async(&self) -> bool {
        false
    }
}

/// Where effectful dispatchers run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectMode {
    /// Spawn effects on the runtime the pipeline was started on.
    #[default]
    Background,
    /// Run every effect inline on the foreground task.
    Immediate,
}

/// Execution context resolved from an [`EffectMode`].
#[derive(Debug, Clone)]
pub enum EffectContext {
    Background(Handle),
    Immediate,
}

impl EffectContext {
    /// Resolve the mode against the current tokio runtime.
    ///
    /// # Panics
    /// `Background` must be resolved from within a tokio runtime.
    pub fn resolve(mode: EffectMode) -> Self {
        match mode {
            EffectMode::Background => Self::Background(Handle::current()),
            EffectMode::Immediate => Self::Immediate,
        }
    }
}

trait Route<A, R>: Send + Sync {
    fn name(&self) -> &'static str;
    fn is_async(&self) -> bool;
    fn pending(&self) -> R;
    fn failure(&self, error: MviError) -> R;
    fn run(&self, action: A) -> BoxFuture<'static, R>;
}

struct TypedRoute<A, D: Dispatcher<A>, R>
where
    A: Send + 'static,
{
    dispatcher: Arc<D>,
    lift: fn(Outcome<D::Value>) -> R,
    _action: PhantomData<fn(A)>,
}

impl<A, D, R> Route<A, R> for TypedRoute<A, D, R>
where
    A: Send + 'static,
    D: Dispatcher<A>,
    R: Send + 'static,
{
    fn name(&self) -> &'static str {
        self.dispatcher.name()
    }

    fn is_async(&self) -> bool {
        self.dispatcher.is_async()
    }

    fn pending(&self) -> R {
        (self.lift)(Outcome::Pending)
    }

    fn failure(&self, error: MviError) -> R {
        (self.lift)(Outcome::Failure(error))
    }

    fn run(&self, action: A) -> BoxFuture<'static, R> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let lift = self.lift;
        Box::pin(async move { lift(dispatcher.execute(action).await.into()) })
    }
}

/// Terminal result of an effect task. A panic or abort becomes a Failure.
async fn settle<A, R>(route: &dyn Route<A, R>, task: JoinHandle<R>) -> R {
    match task.await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(dispatcher = route.name(), error = %err, "Effect task aborted");
            route.failure(
                MviError::new(format!("{} effect aborted", route.name())).with_cause(err.to_string()),
            )
        }
    }
}

/// Routes actions by kind to their dispatcher and merges the results.
pub struct ActionProcessor<A: Action, R> {
    routes: HashMap<A::Kind, Arc<dyn Route<A, R>>>,
    effects: EffectContext,
}

impl<A, R> ActionProcessor<A, R>
where
    A: Action,
    R: Send + 'static,
{
    pub fn new(effects: EffectContext) -> Self {
        Self {
            routes: HashMap::new(),
            effects,
        }
    }

    /// Register the dispatcher for `kind`, replacing any previous route.
    pub fn route<D>(mut self, kind: A::Kind, dispatcher: D, lift: fn(Outcome<D::Value>) -> R) -> Self
    where
        D: Dispatcher<A>,
    {
        let route = TypedRoute {
            dispatcher: Arc::new(dispatcher),
            lift,
            _action: PhantomData,
        };
        self.routes.insert(kind, Arc::new(route));
        self
    }

    /// Whether a route exists for `kind`.
    pub fn handles(&self, kind: A::Kind) -> bool {
        self.routes.contains_key(&kind)
    }

    /// Dispatch one action.
    ///
    /// Pushes the Pending result before any work starts. The terminal result
    /// is pushed once the effect completes, which for background effects may
    /// be after this call returns. A dispatcher that panics produces a
    /// Failure result in either case.
    ///
    /// # Errors
    /// Returns [`PipelineError::UnknownAction`] if no route matches the
    /// action's kind. Nothing is pushed into the sink in that case.
    pub async fn process(&self, action: A, sink: &ResultSink<R>) -> Result<(), PipelineError> {
        let kind = action.kind();
        let Some(route) = self.routes.get(&kind) else {
            return Err(PipelineError::UnknownAction {
                kind: format!("{:?}", kind),
            });
        };

        tracing::debug!(dispatcher = route.name(), kind = ?kind, "Dispatching action");
        if sink.send(route.pending()).is_err() {
            tracing::trace!(dispatcher = route.name(), "Pending result dropped (sink closed)");
        }

        let effect = route.run(action);
        match &self.effects {
            EffectContext::Background(handle) if route.is_async() => {
                let route = Arc::clone(route);
                let sink = sink.clone();
                let task = handle.spawn(effect);
                handle.spawn(async move {
                    let result = settle(route.as_ref(), task).await;
                    // Fire-and-forget: the effect has already run even if
                    // nobody is left to reduce its result.
                    if sink.send(result).is_err() {
                        tracing::trace!(
                            dispatcher = route.name(),
                            "Effect result dropped (pipeline gone)"
                        );
                    }
                });
            }
            _ => {
                // Awaited in place, but behind a task boundary so a panicking
                // dispatcher yields a Failure instead of unwinding the caller.
                let result = settle(route.as_ref(), tokio::spawn(effect)).await;
                if sink.send(result).is_err() {
                    tracing::trace!(dispatcher = route.name(), "Result dropped (sink closed)");
                }
            }
        }
        Ok(())
    }
}
