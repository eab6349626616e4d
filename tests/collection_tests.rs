//! Collection integration tests against the bundled catalog.

use bestiary::{
    battle, BattleOutcome, Catalog, Collection, EngineError, EvolveOutcome, SpeciesId, Traversal,
};

fn id(raw: u16) -> SpeciesId {
    SpeciesId::new(raw)
}

// =============================================================================
// Build-up and lookup
// =============================================================================

#[test]
fn test_collection_from_starter() {
    let catalog = Catalog::classic();
    let starter = catalog.get(Catalog::STARTERS[1]).unwrap();

    let collection = Collection::with_starter(starter);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(id(4)).unwrap().name, "Charmander");
}

#[test]
fn test_add_search_release_flow() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();

    for raw in [25, 1, 150, 7, 133] {
        collection.add_species(&catalog, id(raw)).unwrap();
    }
    assert_eq!(collection.len(), 5);

    // Duplicate additions are rejected without touching the tree.
    let err = collection.add_species(&catalog, id(25)).unwrap_err();
    assert_eq!(err, EngineError::AlreadyExists(id(25)));
    assert_eq!(collection.len(), 5);

    // Release one and it is gone.
    let released = collection.remove(id(150)).unwrap();
    assert_eq!(released.name, "Mewtwo");
    assert!(!collection.contains(id(150)));

    let in_order: Vec<u16> = collection.iter_in().map(|e| e.id.raw()).collect();
    assert_eq!(in_order, vec![1, 7, 25, 133]);
}

#[test]
fn test_entries_survive_catalog_drop() {
    let mut collection = Collection::new();
    {
        let catalog = Catalog::classic();
        collection.add_species(&catalog, id(6)).unwrap();
    }
    // Entries are owned copies; nothing borrows from the catalog.
    assert_eq!(collection.get(id(6)).unwrap().name, "Charizard");
}

// =============================================================================
// Traversal orders
// =============================================================================

#[test]
fn test_two_child_removal_promotes_successor() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    for raw in [5, 3, 8, 1, 4, 7, 9] {
        collection.add_species(&catalog, id(raw)).unwrap();
    }

    let in_order: Vec<u16> = collection.iter_in().map(|e| e.id.raw()).collect();
    assert_eq!(in_order, vec![1, 3, 4, 5, 7, 8, 9]);

    // Removing the two-child root promotes the in-order successor.
    collection.remove(id(5)).unwrap();
    let in_order: Vec<u16> = collection.iter_in().map(|e| e.id.raw()).collect();
    assert_eq!(in_order, vec![1, 3, 4, 7, 8, 9]);

    // No duplicate of the promoted entry survives anywhere.
    let sevens = collection.iter_pre().filter(|e| e.id == id(7)).count();
    assert_eq!(sevens, 1);
}

#[test]
fn test_all_traversals_cover_all_entries() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    for raw in [50, 20, 80, 10, 30, 70, 90] {
        collection.add_species(&catalog, id(raw)).unwrap();
    }

    for order in [
        Traversal::PreOrder,
        Traversal::InOrder,
        Traversal::PostOrder,
        Traversal::LevelOrder,
        Traversal::Alphabetical,
    ] {
        let mut ids: Vec<u16> = collection.traverse(order).iter().map(|e| e.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![10, 20, 30, 50, 70, 80, 90], "{order:?}");
    }
}

#[test]
fn test_alphabetical_uses_names_not_ids() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    // Abra(63), Zubat(41), Eevee(133), Mew(151).
    for raw in [41, 63, 133, 151] {
        collection.add_species(&catalog, id(raw)).unwrap();
    }

    let names: Vec<&str> = collection
        .alphabetical()
        .into_iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Abra", "Eevee", "Mew", "Zubat"]);
}

#[test]
fn test_degenerate_insertion_still_works() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    for raw in 1..=100u16 {
        collection.add_species(&catalog, id(raw)).unwrap();
    }

    // Sorted insertion degenerates into a chain.
    assert_eq!(collection.depth(), 100);

    let in_order: Vec<u16> = collection.iter_in().map(|e| e.id.raw()).collect();
    let expected: Vec<u16> = (1..=100).collect();
    assert_eq!(in_order, expected);

    for raw in (1..=100u16).rev() {
        collection.remove(id(raw)).unwrap();
    }
    assert!(collection.is_empty());
}

// =============================================================================
// Evolution
// =============================================================================

#[test]
fn test_evolution_chain_to_final_form() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    collection.add_species(&catalog, id(1)).unwrap();

    assert_eq!(
        collection.evolve(&catalog, id(1)).unwrap(),
        EvolveOutcome::Evolved(id(2))
    );
    assert_eq!(
        collection.evolve(&catalog, id(2)).unwrap(),
        EvolveOutcome::Evolved(id(3))
    );
    // Venusaur is final.
    assert_eq!(
        collection.evolve(&catalog, id(3)).unwrap_err(),
        EngineError::NotEvolvable(id(3))
    );
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(id(3)).unwrap().name, "Venusaur");
}

#[test]
fn test_evolving_into_owned_form_only_removes() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    collection.add_species(&catalog, id(4)).unwrap();
    collection.add_species(&catalog, id(5)).unwrap();
    collection.add_species(&catalog, id(7)).unwrap();

    let outcome = collection.evolve(&catalog, id(4)).unwrap();
    assert_eq!(outcome, EvolveOutcome::AlreadyOwned(id(5)));

    let in_order: Vec<u16> = collection.iter_in().map(|e| e.id.raw()).collect();
    assert_eq!(in_order, vec![5, 7]);
}

// =============================================================================
// Battles
// =============================================================================

#[test]
fn test_battle_between_looked_up_entries() {
    let catalog = Catalog::classic();
    let mut collection = Collection::new();
    collection.add_species(&catalog, id(150)).unwrap(); // Mewtwo
    collection.add_species(&catalog, id(129)).unwrap(); // Magikarp

    let mewtwo = collection.get(id(150)).unwrap();
    let magikarp = collection.get(id(129)).unwrap();

    let report = battle(mewtwo, magikarp);
    assert_eq!(report.outcome, BattleOutcome::Winner(id(150)));

    // Battles never mutate the collection.
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_battle_same_species_is_a_tie() {
    let catalog = Catalog::classic();
    let a = Collection::with_starter(catalog.get(id(25)).unwrap());
    let b = Collection::with_starter(catalog.get(id(25)).unwrap());

    let report = battle(a.get(id(25)).unwrap(), b.get(id(25)).unwrap());
    assert_eq!(report.outcome, BattleOutcome::Tie);
}
