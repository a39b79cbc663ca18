//! Error type shared by both reducers.

use thiserror::Error;

/// Errors a reducer call or action decode can produce.
///
/// Out-of-range indices are deliberately *not* represented here: the insert
/// family clamps and `removeAt` ignores positions past the end of the list.
#[derive(Debug, Error)]
pub enum ReducerError {
    /// The `type` tag of an encoded action names no known variant.
    #[error("unrecognized action")]
    UnrecognizedAction,

    /// A recognized action carried a payload that does not decode.
    #[error("malformed payload for `{kind}` action")]
    MalformedPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The state could not be projected into a value tree for merging.
    #[error("state cannot be projected into a merge tree")]
    UnmergeableState(#[source] serde_json::Error),

    /// The merged value tree no longer fits the state type.
    #[error("merged value does not fit the state type")]
    MergeMismatch(#[source] serde_json::Error),
}
