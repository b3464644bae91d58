mod common;

use common::item;
use doggodex::state::collections::{
    CollectionType, CollectionsIntent, CollectionsReducer, CollectionsState,
};
use doggodex::state::mvi::Reducer;

fn add(state: CollectionsState, collection: CollectionType, id: u32, name: &str) -> CollectionsState {
    CollectionsReducer::reduce(
        state,
        CollectionsIntent::Add {
            collection,
            item: item(id, name),
        },
    )
}

#[test]
fn insertion_is_idempotent_for_every_collection() {
    for collection in CollectionType::ALL {
        let once = add(CollectionsState::default(), collection, 6, "Akita");
        let twice = add(once.clone(), collection, 6, "Akita");
        assert_eq!(once, twice);
        assert_eq!(twice.items(collection).len(), 1);
    }
}

#[test]
fn removing_absent_id_changes_nothing() {
    for collection in CollectionType::ALL {
        let state = add(CollectionsState::default(), collection, 6, "Akita");
        let after = CollectionsReducer::reduce(
            state.clone(),
            CollectionsIntent::Remove {
                collection,
                item_id: 7,
            },
        );
        assert_eq!(state, after);
    }
}

#[test]
fn adopt_scenario() {
    let state = CollectionsState {
        ready_to_adopt: vec![item(6, "Akita")],
        ..CollectionsState::default()
    };
    let state = CollectionsReducer::reduce(state, CollectionsIntent::Adopt);
    assert_eq!(state.owned, vec![item(6, "Akita")]);
    assert!(state.ready_to_adopt.is_empty());
    assert!(state.wishlist.is_empty());
    assert_eq!(state.active_collection, None);
}

#[test]
fn adopt_keeps_existing_owned_at_head() {
    let state = add(CollectionsState::default(), CollectionType::Owned, 1, "Affenpinscher");
    let state = add(state, CollectionType::ReadyToAdopt, 3, "Boxer");
    let state = add(state, CollectionType::ReadyToAdopt, 2, "Beagle");
    let state = add(state, CollectionType::Wishlist, 9, "Pug");

    let state = CollectionsReducer::reduce(state, CollectionsIntent::Adopt);

    let owned: Vec<u32> = state.owned.iter().map(|i| i.id).collect();
    assert_eq!(owned, vec![1, 3, 2]);
    assert!(state.ready_to_adopt.is_empty());
    assert_eq!(state.wishlist, vec![item(9, "Pug")]);
}

#[test]
fn adopting_twice_never_duplicates_owned() {
    let state = add(CollectionsState::default(), CollectionType::ReadyToAdopt, 6, "Akita");
    let state = CollectionsReducer::reduce(state, CollectionsIntent::Adopt);
    let state = add(state, CollectionType::ReadyToAdopt, 6, "Akita");
    let state = CollectionsReducer::reduce(state, CollectionsIntent::Adopt);

    assert_eq!(state.owned, vec![item(6, "Akita")]);
    assert!(state.ready_to_adopt.is_empty());
}

#[test]
fn active_collection_is_independent_of_contents() {
    let state = CollectionsReducer::reduce(
        CollectionsState::default(),
        CollectionsIntent::SetActive(Some(CollectionType::ReadyToAdopt)),
    );
    let state = add(state, CollectionType::ReadyToAdopt, 6, "Akita");
    let state = CollectionsReducer::reduce(state, CollectionsIntent::Adopt);
    assert_eq!(state.active_collection, Some(CollectionType::ReadyToAdopt));
    assert_eq!(state.memberships(6), vec![CollectionType::Owned]);
}
