//! Deep-merge walk over `serde_json` value trees.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::map::Entry;
use serde_json::Value;

use crate::error::ReducerError;
use crate::map::action::MergePatch;

/// Folds `patch` onto `base`, key by key, at every nesting level.
///
/// Two objects merge recursively; in every other pairing the patch value
/// replaces the base value. An array on either side is replaced wholesale,
/// never merged element-wise. A `null` in the patch is a present value and
/// overwrites; absence is expressed by omitting the key.
pub(super) fn merge_value(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, incoming) in patch {
                match base.entry(key) {
                    Entry::Occupied(mut occupied) => {
                        let slot = occupied.get_mut();
                        if slot.is_object() && incoming.is_object() {
                            merge_value(slot, incoming);
                        } else {
                            *slot = incoming;
                        }
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert(incoming);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Serializes the state into a value tree, folds the patch in, and rebuilds
/// the state type from the merged tree.
pub(super) fn merge_state<State>(state: State, patch: MergePatch) -> Result<State, ReducerError>
where
    State: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(&state).map_err(ReducerError::UnmergeableState)?;
    merge_value(&mut merged, patch);
    serde_json::from_value(merged).map_err(ReducerError::MergeMismatch)
}
