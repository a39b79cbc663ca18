//! List-state vocabulary: the splice family plus the map fallthrough.

mod action;
mod reducer;
mod state;

pub use action::{CombineAction, IndexSelection, ListAction, Replacement};
pub use reducer::{list_reducer, ListReducer};
pub use state::ListState;
