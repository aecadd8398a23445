use crate::IndexRange;

/// A read-only snapshot of the committed window.
///
/// The engine replaces all three fields together at the end of a successful refresh, so a
/// snapshot never mixes the range of one commit with the padding of another.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    /// The buffered range to render; `None` until the first commit after construction or a
    /// config change.
    pub range: Option<IndexRange>,
    /// Size of the raw visible range at commit time (no buffer).
    pub rows_in_window: usize,
    /// Space to leave before the first rendered row.
    pub top_padding_px: f64,
}

impl WindowSnapshot {
    pub fn is_committed(&self) -> bool {
        self.range.is_some()
    }

    /// The range to render, treating "nothing committed yet" as empty.
    pub fn rendered(&self) -> IndexRange {
        self.range.unwrap_or(IndexRange::EMPTY)
    }
}
