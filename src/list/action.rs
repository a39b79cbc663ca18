//! Actions understood by the list reducer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReducerError;
use crate::map::MapAction;

/// Payload of [`ListAction::Replace`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replacement<Item> {
    pub old_value: Item,
    pub new_value: Item,
}

/// One position or several, as carried by [`ListAction::RemoveAt`].
///
/// Decodes from either a bare integer (`"index": 3`) or an array
/// (`"index": [0, 2]`). Positions always refer to the list as it was
/// before the action; out-of-range positions are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexSelection {
    One(usize),
    Many(Vec<usize>),
}

impl IndexSelection {
    /// Iterates the selected positions.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        match self {
            IndexSelection::One(position) => std::slice::from_ref(position).iter().copied(),
            IndexSelection::Many(positions) => positions.iter().copied(),
        }
    }
}

impl From<usize> for IndexSelection {
    fn from(position: usize) -> Self {
        IndexSelection::One(position)
    }
}

impl From<Vec<usize>> for IndexSelection {
    fn from(positions: Vec<usize>) -> Self {
        IndexSelection::Many(positions)
    }
}

/// List-only actions understood by [`list_reducer`](crate::list_reducer).
///
/// Indices are zero-based. The insert family clamps its index to
/// `[0, len]`; no action validates its payload beyond decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ListAction<Item> {
    /// Append one item at the end.
    Add { payload: Item },
    /// Append the items at the end, in order.
    AddAll { payload: Vec<Item> },
    /// Insert one item at `index`; elements at and after it shift right.
    Insert { index: usize, payload: Item },
    /// Insert the items starting at `index`, preserving their order.
    InsertAll { index: usize, payload: Vec<Item> },
    /// Replace the first element equal to `old_value` with `new_value`.
    Replace { payload: Replacement<Item> },
    /// Drop the first element.
    Shift,
    /// Drop the last element.
    Pop,
    /// Drop every element equal to the payload.
    Remove { payload: Item },
    /// Drop every element equal to any payload item.
    RemoveAll { payload: Vec<Item> },
    /// Drop the element(s) at the given original position(s).
    RemoveAt { index: IndexSelection },
}

impl<Item> ListAction<Item> {
    /// Wire discriminant of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            ListAction::Add { .. } => "add",
            ListAction::AddAll { .. } => "addAll",
            ListAction::Insert { .. } => "insert",
            ListAction::InsertAll { .. } => "insertAll",
            ListAction::Replace { .. } => "replace",
            ListAction::Shift => "shift",
            ListAction::Pop => "pop",
            ListAction::Remove { .. } => "remove",
            ListAction::RemoveAll { .. } => "removeAll",
            ListAction::RemoveAt { .. } => "removeAt",
        }
    }

    pub(crate) fn tag_kind(tag: &str) -> Option<&'static str> {
        match tag {
            "add" => Some("add"),
            "addAll" => Some("addAll"),
            "insert" => Some("insert"),
            "insertAll" => Some("insertAll"),
            "replace" => Some("replace"),
            "shift" => Some("shift"),
            "pop" => Some("pop"),
            "remove" => Some("remove"),
            "removeAll" => Some("removeAll"),
            "removeAt" => Some("removeAt"),
            _ => None,
        }
    }
}

/// Full vocabulary of the list reducer: its own actions plus the map
/// actions it forwards to [`map_reducer`](crate::map_reducer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CombineAction<Item, State> {
    List(ListAction<Item>),
    Map(MapAction<State>),
}

impl<Item, State> From<ListAction<Item>> for CombineAction<Item, State> {
    fn from(action: ListAction<Item>) -> Self {
        CombineAction::List(action)
    }
}

impl<Item, State> From<MapAction<State>> for CombineAction<Item, State> {
    fn from(action: MapAction<State>) -> Self {
        CombineAction::Map(action)
    }
}

impl<Item, State> CombineAction<Item, State> {
    /// Wire discriminant of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            CombineAction::List(action) => action.kind(),
            CombineAction::Map(action) => action.kind(),
        }
    }
}

impl<Item, State> CombineAction<Item, State>
where
    Item: DeserializeOwned,
    State: DeserializeOwned,
{
    /// Decodes an action from its tagged wire form, trying the list
    /// vocabulary first and the map vocabulary second.
    ///
    /// An unknown `type` tag is rejected with
    /// [`ReducerError::UnrecognizedAction`], exactly as
    /// [`MapAction::from_value`] rejects it.
    pub fn from_value(value: Value) -> Result<Self, ReducerError> {
        let tag_kind = match value.get("type").and_then(Value::as_str) {
            Some(tag) => (
                ListAction::<Item>::tag_kind(tag),
                MapAction::<State>::tag_kind(tag),
            ),
            None => (None, None),
        };
        match tag_kind {
            (Some(kind), _) => serde_json::from_value(value)
                .map(CombineAction::List)
                .map_err(|source| ReducerError::MalformedPayload { kind, source }),
            (None, Some(kind)) => serde_json::from_value(value)
                .map(CombineAction::Map)
                .map_err(|source| ReducerError::MalformedPayload { kind, source }),
            (None, None) => Err(ReducerError::UnrecognizedAction),
        }
    }
}
