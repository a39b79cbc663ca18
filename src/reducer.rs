//! Reducer trait: the seam between this crate and a caller's store glue.

use crate::error::ReducerError;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer handles.
    type Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects. The only
    /// failures are action decoding and merge round-trip mismatches;
    /// every list operation is total.
    fn reduce(state: Self::State, action: Self::Action) -> Result<Self::State, ReducerError>;
}
