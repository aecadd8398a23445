use crate::ConfigError;

/// What to do when the list has no extent to scroll through (zero items).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegeneratePolicy {
    /// Commit an empty window `{0, 0}` with zero padding.
    ///
    /// A `Vertical` event is only reported if the previously committed window was non-empty.
    #[default]
    Normalize,
    /// Leave the committed window untouched and report nothing.
    KeepPrevious,
}

/// Configuration for [`crate::WindowEngine`].
///
/// Options are plain data and cheap to copy. Adapters typically keep a copy, tweak a field, and
/// hand it back through `WindowEngine::set_options`, which revalidates it and clears the
/// committed window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Total number of virtual items.
    pub item_count: usize,
    /// Fixed row height in pixels. Must be finite and greater than zero.
    pub row_height: f64,
    /// Extra rows rendered on each side of the visible range.
    ///
    /// When `None`, the buffer is derived from the visible row count at the first commit and
    /// kept until the options change.
    pub buffer: Option<usize>,
    /// Quiet period after the last scroll event before the window is recomputed.
    pub debounce_interval_ms: u64,
    pub degenerate_policy: DegeneratePolicy,
}

impl WindowOptions {
    /// Creates options with a derived buffer and no debounce delay.
    pub fn new(item_count: usize, row_height: f64) -> Self {
        Self {
            item_count,
            row_height,
            buffer: None,
            debounce_interval_ms: 0,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_buffer(mut self, buffer: Option<usize>) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_debounce_interval_ms(mut self, debounce_interval_ms: u64) -> Self {
        self.debounce_interval_ms = debounce_interval_ms;
        self
    }

    pub fn with_degenerate_policy(mut self, degenerate_policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = degenerate_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(ConfigError::InvalidRowHeight {
                row_height: self.row_height,
            });
        }
        Ok(())
    }

    /// Height of the full scrollable extent.
    pub fn total_height_px(&self) -> f64 {
        self.row_height * self.item_count as f64
    }
}
