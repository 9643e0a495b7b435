//! Creation screen: edit the form fields and save a new creature.

mod action;
mod intent;
mod processor;
mod reducer;
mod result;
mod state;

use std::sync::Arc;

use crate::data::CreatureRepository;
use crate::model::{AttributeLookup, RecordGenerator};
use crate::mvi::{EffectContext, PassThrough, Pipeline, PipelineError, PipelineOptions, StateSubscription};
use crate::shutdown::ShutdownHandle;

pub use action::{AddCreatureAction, AddCreatureActionKind};
pub use intent::AddCreatureIntent;
pub use processor::{
    add_creature_processor, AttributeDispatcher, AvatarDispatcher, NameDispatcher, SaveDispatcher,
};
pub use reducer::AddCreatureReducer;
pub use result::AddCreatureResult;
pub use state::AddCreatureViewState;

/// Pipeline of the creation screen.
///
/// Every intent is accepted. The generator is shared between the reducer,
/// which previews the creature while fields change, and the save
/// dispatcher, which builds the stored record.
pub struct AddCreatureViewModel {
    pipeline: Pipeline<AddCreatureIntent, AddCreatureViewState>,
}

impl AddCreatureViewModel {
    pub fn new(
        repository: Arc<dyn CreatureRepository>,
        generator: Arc<dyn RecordGenerator>,
        lookup: Arc<dyn AttributeLookup>,
        options: PipelineOptions,
        shutdown: ShutdownHandle,
    ) -> Self {
        let processor = add_creature_processor(
            repository,
            Arc::clone(&generator),
            lookup,
            EffectContext::resolve(options.effects),
        );
        let pipeline = Pipeline::spawn(
            PassThrough,
            processor,
            AddCreatureReducer::new(generator),
            options,
            shutdown,
        );
        Self { pipeline }
    }

    pub fn process_intent(&self, intent: AddCreatureIntent) -> Result<(), PipelineError> {
        self.pipeline.process_intent(intent)
    }

    pub fn states(&self) -> StateSubscription<AddCreatureViewState> {
        self.pipeline.states()
    }

    pub fn current_state(&self) -> AddCreatureViewState {
        self.pipeline.current_state()
    }

    pub fn pipeline(&self) -> &Pipeline<AddCreatureIntent, AddCreatureViewState> {
        &self.pipeline
    }

    pub fn into_pipeline(self) -> Pipeline<AddCreatureIntent, AddCreatureViewState> {
        self.pipeline
    }
}
