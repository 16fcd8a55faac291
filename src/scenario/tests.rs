#![cfg(test)]

use std::sync::Arc;

use crate::engine::session::{SetupConfig, Side};
use crate::scenario::{ScenarioBook, ScenarioError};
use crate::storage::{InMemoryStore, KvStore, SCENARIOS_KEY};

fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

fn setup_2_3() -> SetupConfig {
    let mut setup = SetupConfig::default();
    setup.set_mafia_count(2);
    setup.set_citizen_count(3);
    setup.edit_role_name(Side::Mafia, 0, "Godfather");
    setup.edit_role_name(Side::Citizen, 1, "Doctor");
    setup
}

#[test]
fn save_with_blank_name_fails_and_mutates_nothing() {
    let store = store();
    let mut book = ScenarioBook::load(store.clone());

    for name in ["", "   ", "\t\n"] {
        let err = book.save(name, &setup_2_3()).expect_err("blank name must fail");
        assert!(matches!(err, ScenarioError::Validation(_)));
    }
    assert!(book.all().is_empty());
    assert!(store.get(SCENARIOS_KEY).is_none(), "nothing persisted");
}

#[test]
fn save_trims_the_name_and_persists_the_list() {
    let store = store();
    let mut book = ScenarioBook::load(store.clone());

    let saved = book.save("  Party A  ", &setup_2_3()).expect("valid save");
    assert_eq!(saved.name, "Party A");
    assert_eq!(book.all().len(), 1);

    let raw = store.get(SCENARIOS_KEY).expect("list mirrored to store");
    assert!(raw.contains("\"Party A\""));
    assert!(raw.contains("\"mafiasCount\":2"));
}

#[test]
fn save_then_load_round_trips_the_setup() {
    let store = store();
    let mut book = ScenarioBook::load(store);
    let original = setup_2_3();

    let saved = book.save("Party A", &original).expect("valid save");
    let found = book.find(&saved.id).expect("saved scenario is findable");
    assert_eq!(found.to_setup(), original);
}

#[test]
fn saved_scenarios_are_value_snapshots() {
    let store = store();
    let mut book = ScenarioBook::load(store);
    let mut setup = setup_2_3();

    let saved = book.save("Party A", &setup).expect("valid save");
    setup.edit_role_name(Side::Mafia, 0, "Bomber");
    setup.set_citizen_count(9);

    let found = book.find(&saved.id).expect("saved scenario is findable");
    assert_eq!(found.mafia_roles[0], "Godfather");
    assert_eq!(found.citizens_count, 3);
}

#[test]
fn rename_replaces_only_the_name() {
    let store = store();
    let mut book = ScenarioBook::load(store.clone());
    let saved = book.save("Party A", &setup_2_3()).expect("valid save");

    assert!(book.rename(&saved.id, "  Party B  "));
    let found = book.find(&saved.id).expect("still present");
    assert_eq!(found.name, "Party B");
    assert_eq!(found.mafias_count, 2);

    let raw = store.get(SCENARIOS_KEY).expect("rename persisted");
    assert!(raw.contains("\"Party B\""));
    assert!(!raw.contains("\"Party A\""));
}

#[test]
fn rename_with_blank_name_or_unknown_id_is_ignored() {
    let store = store();
    let mut book = ScenarioBook::load(store);
    let saved = book.save("Party A", &setup_2_3()).expect("valid save");

    assert!(!book.rename(&saved.id, "   "));
    assert!(!book.rename("no-such-id", "Party B"));
    assert_eq!(
        book.find(&saved.id).expect("still present").name,
        "Party A"
    );
}

#[test]
fn delete_removes_and_persists() {
    let store = store();
    let mut book = ScenarioBook::load(store.clone());
    let first = book.save("Party A", &setup_2_3()).expect("valid save");
    let second = book.save("Party B", &setup_2_3()).expect("valid save");

    assert!(book.delete(&first.id));
    assert!(!book.delete(&first.id), "second delete finds nothing");
    assert_eq!(book.all().len(), 1);
    assert_eq!(book.all()[0].id, second.id);

    let raw = store.get(SCENARIOS_KEY).expect("delete persisted");
    assert!(!raw.contains("\"Party A\""));
}

#[test]
fn suggested_matches_on_exact_counts_only() {
    let store = store();
    let mut book = ScenarioBook::load(store);

    let mut two_three = SetupConfig::default();
    two_three.set_mafia_count(2);
    two_three.set_citizen_count(3);
    let mut two_four = SetupConfig::default();
    two_four.set_mafia_count(2);
    two_four.set_citizen_count(4);

    book.save("Fit", &two_three).expect("valid save");
    book.save("Too big", &two_four).expect("valid save");
    book.save("Fit too", &two_three).expect("valid save");

    let names: Vec<&str> = book
        .suggested(2, 3)
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Fit", "Fit too"], "stored order, exact counts");
    assert!(book.suggested(3, 2).is_empty());
}

#[test]
fn list_survives_a_reload_through_the_store() {
    let store = store();
    let mut book = ScenarioBook::load(store.clone());
    book.save("Party A", &setup_2_3()).expect("valid save");

    let reloaded = ScenarioBook::load(store);
    assert_eq!(reloaded.all().len(), 1);
    assert_eq!(reloaded.all()[0].name, "Party A");
}

#[test]
fn malformed_persisted_list_reads_as_empty() {
    let store = store();
    store
        .set(SCENARIOS_KEY, "{definitely not a list")
        .expect("in-memory set cannot fail");

    let book = ScenarioBook::load(store);
    assert!(book.all().is_empty());
}
