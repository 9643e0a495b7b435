//! Multicast state store with replay of the latest state.
//!
//! The store keeps the most recently published state and a broadcast
//! channel to every subscriber. A new subscriber receives the cached state
//! immediately, followed by later states in publication order. Publishing a
//! state equal to the cached one is a no-op.
//!
//! Each subscription buffers at most [`SUBSCRIPTION_CAPACITY`] states. An
//! observer that falls further behind skips the oldest ones and resumes with
//! the most recent, so it still converges on the latest state.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};

use futures_core::future::BoxFuture;
use futures_core::Stream;
use parking_lot::Mutex;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use super::error::PipelineError;
use super::state::ViewState;

/// States buffered per subscription before a slow observer starts skipping.
pub const SUBSCRIPTION_CAPACITY: usize = 64;

/// Thread-safe handle to the live state sequence.
///
/// Cloning the handle shares the same cache and channel.
#[derive(Clone)]
pub struct StateStore<S: ViewState> {
    inner: Arc<Mutex<StoreInner<S>>>,
}

struct StoreInner<S> {
    latest: S,
    /// `None` once the store is closed.
    sender: Option<broadcast::Sender<S>>,
    termination: Option<PipelineError>,
    emitted: u64,
}

impl<S: ViewState> StateStore<S> {
    /// Create a store whose first emission is `seed`.
    pub fn new(seed: S) -> Self {
        let (sender, _) = broadcast::channel(SUBSCRIPTION_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                latest: seed,
                sender: Some(sender),
                termination: None,
                emitted: 1,
            })),
        }
    }

    /// Publish a new state.
    ///
    /// Returns false if the state was suppressed, either because it equals
    /// the cached state or because the store is closed.
    pub fn publish(&self, state: S) -> bool {
        let mut inner = self.inner.lock();
        if inner.latest == state {
            return false;
        }
        let Some(sender) = &inner.sender else {
            return false;
        };
        // No subscribers is not an error: the state is still cached.
        let _ = sender.send(state.clone());
        inner.latest = state;
        inner.emitted += 1;
        true
    }

    /// Attach a new observer.
    ///
    /// The returned subscription already holds the latest state. On a closed
    /// store the subscription yields that state and then ends.
    pub fn subscribe(&self) -> StateSubscription<S> {
        let inner = self.inner.lock();
        StateSubscription {
            replay: Some(inner.latest.clone()),
            receiver: inner.sender.as_ref().map(broadcast::Sender::subscribe),
            in_flight: None,
        }
    }

    /// Clone of the most recently published state.
    pub fn current(&self) -> S {
        self.inner.lock().latest.clone()
    }

    /// Number of distinct states emitted so far, seed included.
    pub fn emitted(&self) -> u64 {
        self.inner.lock().emitted
    }

    /// Number of currently attached observers.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .sender
            .as_ref()
            .map_or(0, broadcast::Sender::receiver_count)
    }

    /// End every subscription normally. States already buffered are still
    /// delivered.
    pub fn close(&self) {
        self.inner.lock().sender = None;
    }

    /// End every subscription and record a fatal cause.
    pub fn terminate(&self, error: PipelineError) {
        let mut inner = self.inner.lock();
        tracing::error!(error = %error, "State store terminated");
        inner.sender = None;
        inner.termination = Some(error);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().sender.is_none()
    }

    /// Fatal cause that terminated the store, if any.
    pub fn termination(&self) -> Option<PipelineError> {
        self.inner.lock().termination.clone()
    }
}

type Recv<S> = BoxFuture<'static, (Option<S>, broadcast::Receiver<S>)>;

/// One observer's view of the state sequence.
///
/// Dropping the subscription detaches the observer; it never affects the
/// pipeline or in-flight effects.
pub struct StateSubscription<S> {
    replay: Option<S>,
    receiver: Option<broadcast::Receiver<S>>,
    /// Receive started by a poll that has not completed yet. It owns the
    /// receiver until it resolves, so a cancelled `next()` loses nothing.
    in_flight: Option<Recv<S>>,
}

impl<S> Unpin for StateSubscription<S> {}

async fn recv_next<S: Clone>(
    mut receiver: broadcast::Receiver<S>,
) -> (Option<S>, broadcast::Receiver<S>) {
    loop {
        match receiver.recv().await {
            Ok(state) => return (Some(state), receiver),
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Slow state observer skipped ahead");
            }
            Err(RecvError::Closed) => return (None, receiver),
        }
    }
}

impl<S: ViewState> StateSubscription<S> {
    /// Wait for the next state. Returns `None` once the store is closed and
    /// every buffered state has been consumed.
    pub async fn next(&mut self) -> Option<S> {
        std::future::poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }

    /// Take the next buffered state without waiting.
    ///
    /// Returns `None` while an interrupted [`next`](Self::next) is still
    /// pending.
    pub fn try_next(&mut self) -> Option<S> {
        if let Some(state) = self.replay.take() {
            return Some(state);
        }
        let receiver = self.receiver.as_mut()?;
        loop {
            match receiver.try_recv() {
                Ok(state) => return Some(state),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Slow state observer skipped ahead");
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Closed) => {
                    self.receiver = None;
                    return None;
                }
            }
        }
    }

    /// Wait for the first state matching `predicate`, skipping the others.
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Option<S>
    where
        F: FnMut(&S) -> bool,
    {
        while let Some(state) = self.next().await {
            if predicate(&state) {
                return Some(state);
            }
        }
        None
    }
}

impl<S: ViewState> Stream for StateSubscription<S> {
    type Item = S;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        let this = &mut *self;
        if let Some(state) = this.replay.take() {
            return Poll::Ready(Some(state));
        }
        if this.in_flight.is_none() {
            let Some(receiver) = this.receiver.take() else {
                return Poll::Ready(None);
            };
            this.in_flight = Some(Box::pin(recv_next(receiver)));
        }
        let Some(in_flight) = this.in_flight.as_mut() else {
            return Poll::Ready(None);
        };
        let (state, receiver) = ready!(in_flight.as_mut().poll(cx));
        this.in_flight = None;
        if state.is_some() {
            this.receiver = Some(receiver);
        }
        Poll::Ready(state)
    }
}
