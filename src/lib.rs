//! Pure state reducers for map-like and list-like state.
//!
//! This crate provides the two state-transition functions of a
//! unidirectional data flow. The caller owns the state, the event loop,
//! and the dispatch wiring; the reducers only compute the next state.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ caller
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable value owned by the caller
//! - **Action**: one requested transition plus its payload
//! - **Reducer**: pure function `(State, Action) -> State`
//!
//! [`map_reducer`] handles record-shaped state (`set`, `merge`);
//! [`list_reducer`] handles state carrying an ordered list field and
//! falls through to the map vocabulary for `set`/`merge`.
//!
//! # Example
//!
//! ```
//! use refold::{list_reducer, CombineAction, ListAction, ListState};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Inbox {
//!     unread: u32,
//!     list: Vec<String>,
//! }
//!
//! impl ListState for Inbox {
//!     type Item = String;
//!
//!     fn list(&self) -> &[String] {
//!         &self.list
//!     }
//!
//!     fn with_list(mut self, list: Vec<String>) -> Self {
//!         self.list = list;
//!         self
//!     }
//! }
//!
//! let inbox = Inbox { unread: 1, list: vec!["ping".into()] };
//! let action = CombineAction::from(ListAction::Add { payload: "pong".into() });
//! let inbox = list_reducer(inbox, action)?;
//! assert_eq!(inbox.list, ["ping", "pong"]);
//! assert_eq!(inbox.unread, 1);
//! # Ok::<(), refold::ReducerError>(())
//! ```

mod error;
mod reducer;

pub mod list;
pub mod map;

pub use error::ReducerError;
pub use list::{
    list_reducer, CombineAction, IndexSelection, ListAction, ListReducer, ListState, Replacement,
};
pub use map::{map_reducer, MapAction, MapReducer, MergePatch};
pub use reducer::Reducer;
