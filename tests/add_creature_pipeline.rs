//! Creation screen driven end to end against a scripted repository.

mod common;

use common::{creature, wait_for, FakeRepository};
use creaturemon::model::{
    AttributeError, AttributeKind, AttributeLookup, AttributeStore, CreatureAttributes,
    CreatureGenerator,
};
use creaturemon::mvi::PipelineOptions;
use creaturemon::screens::add_creature::{AddCreatureIntent, AddCreatureViewModel};
use creaturemon::shutdown::ShutdownHandle;
use std::sync::Arc;

fn view_model(repository: &Arc<FakeRepository>) -> AddCreatureViewModel {
    view_model_with(repository, Arc::new(AttributeStore))
}

fn view_model_with(
    repository: &Arc<FakeRepository>,
    lookup: Arc<dyn AttributeLookup>,
) -> AddCreatureViewModel {
    AddCreatureViewModel::new(
        repository.clone(),
        Arc::new(CreatureGenerator),
        lookup,
        PipelineOptions::default(),
        ShutdownHandle::detached(),
    )
}

/// Indexes its table without a bounds check.
struct UncheckedLookup;

impl AttributeLookup for UncheckedLookup {
    fn value(&self, _kind: AttributeKind, index: usize) -> Result<u32, AttributeError> {
        Ok([0, 3, 7, 10][index])
    }
}

/// Level indices 1, 2, 3 resolve to values 3, 7, 10.
fn save_rex() -> AddCreatureIntent {
    AddCreatureIntent::Save {
        avatar: 7,
        name: "Rex".to_string(),
        intelligence: 1,
        strength: 2,
        endurance: 3,
    }
}

#[tokio::test]
async fn test_save_stores_generated_creature() {
    let repository = FakeRepository::new();
    let view_model = view_model(&repository);
    let mut states = view_model.states();

    view_model.process_intent(save_rex()).unwrap();

    let state = wait_for(&mut states, |state| state.is_save_complete).await;
    assert!(!state.is_processing);
    assert_eq!(state.error, None);
    assert_eq!(repository.save_calls(), 1);
    assert_eq!(repository.saved(), vec![creature("Rex", (3, 7, 10), 7)]);
}

#[tokio::test]
async fn test_field_edits_preview_the_creature() {
    let repository = FakeRepository::new();
    let view_model = view_model(&repository);
    let mut states = view_model.states();

    for intent in [
        AddCreatureIntent::Avatar { avatar: 7 },
        AddCreatureIntent::Name {
            name: "Rex".to_string(),
        },
        AddCreatureIntent::Intelligence { index: 1 },
        AddCreatureIntent::Strength { index: 2 },
        AddCreatureIntent::Endurance { index: 3 },
    ] {
        view_model.process_intent(intent).unwrap();
    }

    let state = wait_for(&mut states, |state| {
        state.creature.attributes == CreatureAttributes::new(3, 7, 10) && !state.is_processing
    })
    .await;
    assert_eq!(state.creature, creature("Rex", (3, 7, 10), 7));
    assert!(state.is_avatar_selected);
    assert!(state.can_save());
    assert!(!state.is_save_complete);
    assert_eq!(repository.save_calls(), 0);
}

#[tokio::test]
async fn test_save_failure_surfaces_error() {
    let repository = FakeRepository::new();
    repository.fail_save("disk full");
    let view_model = view_model(&repository);
    let mut states = view_model.states();

    view_model.process_intent(save_rex()).unwrap();

    let state = wait_for(&mut states, |state| state.error.is_some()).await;
    assert!(!state.is_processing);
    assert!(!state.is_save_complete);
    assert_eq!(
        state.error.map(|error| error.message().to_string()),
        Some("Storage unavailable: disk full".to_string())
    );
    assert_eq!(repository.save_calls(), 1);
    assert!(repository.saved().is_empty());
}

#[tokio::test]
async fn test_out_of_range_level_is_reported_and_cleared_by_next_edit() {
    let repository = FakeRepository::new();
    let view_model = view_model(&repository);
    let mut states = view_model.states();

    view_model
        .process_intent(AddCreatureIntent::Strength { index: 12 })
        .unwrap();
    let failed = wait_for(&mut states, |state| state.error.is_some()).await;
    assert_eq!(failed.creature.attributes.strength, 0);

    view_model
        .process_intent(AddCreatureIntent::Strength { index: 3 })
        .unwrap();
    let state = wait_for(&mut states, |state| state.creature.attributes.strength == 10).await;
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_save_uses_its_own_fields_over_edited_ones() {
    let repository = FakeRepository::new();
    let view_model = view_model(&repository);

    view_model
        .process_intent(AddCreatureIntent::Name {
            name: "Draft".to_string(),
        })
        .unwrap();
    view_model.process_intent(save_rex()).unwrap();
    view_model.into_pipeline().finish().await;

    assert_eq!(repository.saved(), vec![creature("Rex", (3, 7, 10), 7)]);
}

#[tokio::test]
async fn test_panicking_lookup_surfaces_error_and_keeps_serving() {
    let repository = FakeRepository::new();
    let view_model = view_model_with(&repository, Arc::new(UncheckedLookup));
    let mut states = view_model.states();

    view_model
        .process_intent(AddCreatureIntent::Strength { index: 9 })
        .unwrap();
    let failed = wait_for(&mut states, |state| state.error.is_some()).await;
    assert!(!failed.is_processing);
    assert_eq!(failed.creature.attributes.strength, 0);
    assert_eq!(
        failed.error.map(|error| error.message().to_string()),
        Some("strength effect aborted".to_string())
    );
    assert!(!view_model.pipeline().store().is_closed());

    view_model
        .process_intent(AddCreatureIntent::Strength { index: 2 })
        .unwrap();
    let state = wait_for(&mut states, |state| state.creature.attributes.strength == 7).await;
    assert_eq!(state.error, None);
    assert!(!state.is_processing);
}
