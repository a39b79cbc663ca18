//! Base trait for list-shaped state.

/// State carrying one ordered list field.
///
/// Implementors should be:
/// - Immutable (reducers consume the value and return a new one)
/// - Single-listed (exactly one field holds the ordered items)
/// - Equality-capable on items (`replace`/`remove`/`removeAll` compare
///   items with `PartialEq`)
pub trait ListState: Clone {
    /// Element type stored in the list field.
    type Item: Clone + PartialEq;

    /// Read view of the list field.
    fn list(&self) -> &[Self::Item];

    /// Rebuilds the state with `list` as the new list field.
    ///
    /// Every other field must move through untouched; only the list field
    /// is replaced.
    fn with_list(self, list: Vec<Self::Item>) -> Self;
}
