//! Model-View-Intent (MVI) pipeline primitives.
//!
//! This module provides the screen-independent core of a unidirectional
//! data flow: dispatching actions to per-kind side effects, folding their
//! results into state, and multicasting the state sequence.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Action ──→ ActionProcessor ──→ Result ──→ Reducer ──→ StateStore ──→ View
//!    ↑          (dispatch table,        (merged          (pure fold)    (distinct,
//!    │           one route per kind)     result sink)                    replay latest)
//!    └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Intent**: User-observable trigger, mapped 1:1 onto an action
//! - **Action**: Unit of dispatch, tagged with a kind
//! - **Outcome**: Pending / Success / Failure of one action occurrence
//! - **Reducer**: Pure function that transforms state based on results
//! - **StateStore**: Latest-state cache plus fan-out to observers

mod action;
mod error;
mod filter;
mod intent;
mod outcome;
mod pipeline;
mod processor;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use error::{MviError, PipelineError};
pub use filter::{IntentFilter, PassThrough, TakeFirst};
pub use intent::Intent;
pub use outcome::Outcome;
pub use pipeline::{Pipeline, PipelineOptions, UnknownActionPolicy};
pub use processor::{ActionProcessor, Dispatcher, EffectContext, EffectMode, ResultSink};
pub use reducer::Reducer;
pub use state::ViewState;
pub use store::{StateStore, StateSubscription, SUBSCRIPTION_CAPACITY};
