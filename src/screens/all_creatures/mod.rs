//! List screen: load and clear the stored creatures.

mod action;
mod intent;
mod processor;
mod reducer;
mod result;
mod state;

use std::sync::Arc;

use crate::data::CreatureRepository;
use crate::mvi::{EffectContext, Pipeline, PipelineError, PipelineOptions, StateSubscription, TakeFirst};
use crate::shutdown::ShutdownHandle;

pub use action::{AllCreaturesAction, AllCreaturesActionKind};
pub use intent::AllCreaturesIntent;
pub use processor::{all_creatures_processor, ClearAllDispatcher, LoadAllDispatcher};
pub use reducer::AllCreaturesReducer;
pub use result::AllCreaturesResult;
pub use state::AllCreaturesViewState;

/// Pipeline of the list screen.
///
/// Only the first [`AllCreaturesIntent::LoadAll`] is accepted during the
/// view model's lifetime, so a view that reattaches and re-sends its load
/// intent does not trigger a second load.
pub struct AllCreaturesViewModel {
    pipeline: Pipeline<AllCreaturesIntent, AllCreaturesViewState>,
}

impl AllCreaturesViewModel {
    pub fn new(
        repository: Arc<dyn CreatureRepository>,
        options: PipelineOptions,
        shutdown: ShutdownHandle,
    ) -> Self {
        let processor = all_creatures_processor(repository, EffectContext::resolve(options.effects));
        let pipeline = Pipeline::spawn(
            TakeFirst::new(AllCreaturesIntent::is_load),
            processor,
            AllCreaturesReducer,
            options,
            shutdown,
        );
        Self { pipeline }
    }

    pub fn process_intent(&self, intent: AllCreaturesIntent) -> Result<(), PipelineError> {
        self.pipeline.process_intent(intent)
    }

    pub fn states(&self) -> StateSubscription<AllCreaturesViewState> {
        self.pipeline.states()
    }

    pub fn current_state(&self) -> AllCreaturesViewState {
        self.pipeline.current_state()
    }

    pub fn pipeline(&self) -> &Pipeline<AllCreaturesIntent, AllCreaturesViewState> {
        &self.pipeline
    }

    pub fn into_pipeline(self) -> Pipeline<AllCreaturesIntent, AllCreaturesViewState> {
        self.pipeline
    }
}
