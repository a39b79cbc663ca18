//! Reducer for map-shaped state.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ReducerError;
use crate::map::action::MapAction;
use crate::map::merge::merge_state;
use crate::reducer::Reducer;

/// Computes the next map-shaped state from the current state and an action.
///
/// `Set` returns the payload verbatim, dropping the prior state. `Merge`
/// deep-merges the payload onto the state: keys present in the patch win,
/// keys absent keep the state's value, and array-typed values are replaced
/// wholesale at every nesting level.
pub fn map_reducer<State>(state: State, action: MapAction<State>) -> Result<State, ReducerError>
where
    State: Serialize + DeserializeOwned,
{
    tracing::trace!(action = action.kind(), "reducing map state");
    match action {
        MapAction::Set { payload } => Ok(payload),
        MapAction::Merge { payload } => merge_state(state, payload),
    }
}

/// [`Reducer`] carrier for [`map_reducer`], for callers that plug reducers
/// into store glue through the trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct MapReducer<State> {
    _state: PhantomData<State>,
}

impl<State> Reducer for MapReducer<State>
where
    State: Serialize + DeserializeOwned,
{
    type State = State;
    type Action = MapAction<State>;

    fn reduce(state: State, action: MapAction<State>) -> Result<State, ReducerError> {
        map_reducer(state, action)
    }
}
