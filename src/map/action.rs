//! Actions understood by the map reducer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReducerError;

/// Deep-partial merge payload.
///
/// A value tree in which every key is optional: keys present in the patch
/// overwrite or recurse into the state, keys absent leave the state alone.
/// Arrays are treated as whole values, never merged element-wise.
pub type MergePatch = Value;

/// Actions understood by [`map_reducer`](crate::map_reducer).
///
/// Encodes to and from the tagged wire form `{"type": "set", "payload": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapAction<State> {
    /// Replace the whole state with the payload.
    Set { payload: State },
    /// Deep-merge the payload onto the state, arrays replaced wholesale.
    Merge { payload: MergePatch },
}

impl<State> MapAction<State> {
    /// Wire discriminant of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            MapAction::Set { .. } => "set",
            MapAction::Merge { .. } => "merge",
        }
    }

    pub(crate) fn tag_kind(tag: &str) -> Option<&'static str> {
        match tag {
            "set" => Some("set"),
            "merge" => Some("merge"),
            _ => None,
        }
    }
}

impl<State: DeserializeOwned> MapAction<State> {
    /// Decodes an action from its tagged wire form.
    ///
    /// An unknown `type` tag is the one unrecoverable error of the action
    /// vocabulary and is reported as [`ReducerError::UnrecognizedAction`].
    pub fn from_value(value: Value) -> Result<Self, ReducerError> {
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(tag) => Self::tag_kind(tag),
            None => None,
        };
        match kind {
            Some(kind) => serde_json::from_value(value)
                .map_err(|source| ReducerError::MalformedPayload { kind, source }),
            None => Err(ReducerError::UnrecognizedAction),
        }
    }
}
