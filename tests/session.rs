//! Both screens sharing one repository and one shutdown signal.

mod common;

use common::{creature, temp_config, wait_for, FakeRepository};
use creaturemon::config::Config;
use creaturemon::mvi::PipelineOptions;
use creaturemon::screens::add_creature::AddCreatureIntent;
use creaturemon::screens::all_creatures::AllCreaturesIntent;
use creaturemon::session::Session;
use creaturemon::shutdown::ShutdownPhase;

fn save_intent(name: &str) -> AddCreatureIntent {
    AddCreatureIntent::Save {
        avatar: 7,
        name: name.to_string(),
        intelligence: 1,
        strength: 2,
        endurance: 3,
    }
}

#[tokio::test]
async fn test_saved_creature_appears_in_list_screen() {
    let repository = FakeRepository::new();
    let session = Session::new(repository.clone(), PipelineOptions::default());
    assert_eq!(session.phase(), ShutdownPhase::Running);

    let mut add_states = session.add_creature().states();
    session
        .add_creature()
        .process_intent(save_intent("Rex"))
        .unwrap();
    wait_for(&mut add_states, |state| state.is_save_complete).await;

    let mut list_states = session.all_creatures().states();
    session
        .all_creatures()
        .process_intent(AllCreaturesIntent::LoadAll)
        .unwrap();
    let state = wait_for(&mut list_states, |state| !state.creatures.is_empty()).await;

    assert_eq!(state.creatures, vec![creature("Rex", (3, 7, 10), 7)]);
    session.shutdown().await;
}

#[tokio::test]
async fn test_finish_drains_in_flight_save() {
    let repository = FakeRepository::new();
    let session = Session::new(repository.clone(), PipelineOptions::default());
    let store = session.add_creature().pipeline().store().clone();

    session
        .add_creature()
        .process_intent(save_intent("Moss"))
        .unwrap();
    session.finish().await;

    assert!(store.current().is_save_complete);
    assert!(store.is_closed());
    assert_eq!(repository.save_calls(), 1);
}

#[tokio::test]
async fn test_shutdown_closes_both_screens() {
    let session = Session::new(FakeRepository::new(), PipelineOptions::default());
    let list = session.all_creatures().pipeline().store().clone();
    let add = session.add_creature().pipeline().store().clone();

    session.shutdown().await;

    assert!(list.is_closed());
    assert!(add.is_closed());
    assert_eq!(list.termination(), None);
}

#[tokio::test]
async fn test_json_config_persists_across_sessions() {
    let (dir, config_path) = temp_config("");
    let store_path = dir.path().join("creatures.json");
    std::fs::write(
        &config_path,
        format!(
            "[storage]\nbackend = \"json\"\npath = {:?}\n\n[pipeline]\neffects = \"immediate\"\n",
            store_path.display().to_string()
        ),
    )
    .unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let session = Session::from_config(&config).unwrap();
    session
        .add_creature()
        .process_intent(save_intent("Rex"))
        .unwrap();
    session.finish().await;
    assert!(store_path.exists());

    let session = Session::from_config(&config).unwrap();
    let store = session.all_creatures().pipeline().store().clone();
    session
        .all_creatures()
        .process_intent(AllCreaturesIntent::LoadAll)
        .unwrap();
    session.finish().await;

    assert_eq!(
        store.current().creatures,
        vec![creature("Rex", (3, 7, 10), 7)]
    );
}
