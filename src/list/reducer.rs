//! Reducer for list-shaped state.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ReducerError;
use crate::list::action::{CombineAction, ListAction, Replacement};
use crate::list::state::ListState;
use crate::map::map_reducer;
use crate::reducer::Reducer;

/// Computes the next list-shaped state from the current state and an action.
///
/// List actions rebuild the list field through [`ListState::with_list`] and
/// leave every other field untouched; `set`/`merge` forward to
/// [`map_reducer`] applied to the whole state, list field included.
///
/// Every list branch allocates a fresh list, even when the contents come
/// out unchanged. The one exception is `replace` with no matching element,
/// which returns the input state as-is.
pub fn list_reducer<State>(
    state: State,
    action: CombineAction<State::Item, State>,
) -> Result<State, ReducerError>
where
    State: ListState + Serialize + DeserializeOwned,
{
    tracing::trace!(action = action.kind(), "reducing list state");
    match action {
        CombineAction::List(action) => Ok(apply(state, action)),
        CombineAction::Map(action) => map_reducer(state, action),
    }
}

/// Applies one list-only action. Total: out-of-range indices clamp or are
/// ignored, never rejected.
fn apply<State: ListState>(state: State, action: ListAction<State::Item>) -> State {
    match action {
        ListAction::Add { payload } => {
            let mut next = state.list().to_vec();
            next.push(payload);
            state.with_list(next)
        }

        ListAction::AddAll { payload } => {
            let mut next = state.list().to_vec();
            next.extend(payload);
            state.with_list(next)
        }

        ListAction::Insert { index, payload } => {
            let mut next = state.list().to_vec();
            let at = index.min(next.len());
            next.insert(at, payload);
            state.with_list(next)
        }

        ListAction::InsertAll { index, payload } => {
            let list = state.list();
            let at = index.min(list.len());
            let mut next = Vec::with_capacity(list.len() + payload.len());
            next.extend_from_slice(&list[..at]);
            next.extend(payload);
            next.extend_from_slice(&list[at..]);
            state.with_list(next)
        }

        ListAction::Replace { payload } => {
            let Replacement { old_value, new_value } = payload;
            let matched = state.list().iter().position(|item| *item == old_value);
            match matched {
                Some(at) => {
                    let mut next = state.list().to_vec();
                    next[at] = new_value;
                    state.with_list(next)
                }
                // No match: the only branch that keeps the input list.
                None => state,
            }
        }

        ListAction::Shift => {
            let next = match state.list().split_first() {
                Some((_, rest)) => rest.to_vec(),
                None => Vec::new(),
            };
            state.with_list(next)
        }

        ListAction::Pop => {
            let next = match state.list().split_last() {
                Some((_, rest)) => rest.to_vec(),
                None => Vec::new(),
            };
            state.with_list(next)
        }

        ListAction::Remove { payload } => {
            let next = state
                .list()
                .iter()
                .filter(|&item| *item != payload)
                .cloned()
                .collect();
            state.with_list(next)
        }

        ListAction::RemoveAll { payload } => {
            let next = state
                .list()
                .iter()
                .filter(|&item| !payload.contains(item))
                .cloned()
                .collect();
            state.with_list(next)
        }

        ListAction::RemoveAt { index } => {
            // Positions refer to the input list, so the selection is fixed
            // before any element is dropped.
            let selected: BTreeSet<usize> = index.positions().collect();
            let next = state
                .list()
                .iter()
                .enumerate()
                .filter(|(position, _)| !selected.contains(position))
                .map(|(_, item)| item.clone())
                .collect();
            state.with_list(next)
        }
    }
}

/// [`Reducer`] carrier for [`list_reducer`], for callers that plug reducers
/// into store glue through the trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListReducer<State> {
    _state: PhantomData<State>,
}

impl<State> Reducer for ListReducer<State>
where
    State: ListState + Serialize + DeserializeOwned,
{
    type State = State;
    type Action = CombineAction<State::Item, State>;

    fn reduce(
        state: State,
        action: CombineAction<State::Item, State>,
    ) -> Result<State, ReducerError> {
        list_reducer(state, action)
    }
}
