/// A half-open range of item indexes, `start..end`.
///
/// Ranges produced by this crate always satisfy `start <= end <= item_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl IndexRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<IndexRange> for core::ops::Range<usize> {
    fn from(range: IndexRange) -> Self {
        range.start..range.end
    }
}

/// Vertical geometry read from the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top_px: f64,
    /// Client height of the scroll container.
    pub height_px: f64,
}

impl Viewport {
    pub const fn new(scroll_top_px: f64, height_px: f64) -> Self {
        Self {
            scroll_top_px,
            height_px,
        }
    }
}

/// Notification delivered to the host when the window or the horizontal offset changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent {
    Horizontal { scroll_left_px: f64 },
    Vertical { range: IndexRange },
}

impl ScrollEvent {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical { .. })
    }

    pub fn range(&self) -> Option<IndexRange> {
        match self {
            Self::Vertical { range } => Some(*range),
            Self::Horizontal { .. } => None,
        }
    }
}

/// A single row of the committed window, positioned in the full scroll extent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRow {
    pub index: usize,
    /// Absolute offset of the row's top edge.
    pub top_px: f64,
}
