//! Reducer for the collections state machine.

use crate::state::mvi::Reducer;

use super::intent::CollectionsIntent;
use super::membership;
use super::state::CollectionsState;

pub struct CollectionsReducer;

impl Reducer for CollectionsReducer {
    type State = CollectionsState;
    type Intent = CollectionsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollectionsIntent::Add { collection, item } => {
                membership::push_unique(state.items_mut(collection), item);
                state
            }
            CollectionsIntent::Remove {
                collection,
                item_id,
            } => {
                membership::remove(state.items_mut(collection), item_id);
                state
            }
            CollectionsIntent::SetActive(collection) => {
                state.active_collection = collection;
                state
            }
            CollectionsIntent::Adopt => {
                // Ids already owned are not appended again, so owned stays unique.
                for item in std::mem::take(&mut state.ready_to_adopt) {
                    membership::push_unique(&mut state.owned, item);
                }
                state
            }
        }
    }
}
