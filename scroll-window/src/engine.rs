use alloc::vec::Vec;

use crate::{
    ConfigError, DegeneratePolicy, IndexRange, Viewport, WindowOptions, WindowRow,
    WindowSnapshot, compute_raw_range, expand, should_update,
};

/// What a call to [`WindowEngine::refresh`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The raw range still fits inside the committed buffer; nothing was recomputed.
    Skipped,
    /// The window was recomputed but its bounds did not move.
    Unchanged,
    /// A new window was committed and should be reported to the host.
    Committed(IndexRange),
    /// Degenerate geometry was normalized to an empty window without a notification.
    Settled,
    /// Degenerate geometry was ignored (see [`DegeneratePolicy::KeepPrevious`]).
    Suppressed,
}

impl RefreshOutcome {
    /// The range to report as a `Vertical` event, if any.
    pub fn emitted(&self) -> Option<IndexRange> {
        match self {
            Self::Committed(range) => Some(*range),
            _ => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_) | Self::Settled)
    }
}

/// A headless windowing engine for fixed-height rows.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or timers.
/// - Your adapter calls [`Self::refresh`] with the current viewport geometry whenever it decides
///   the window may have moved.
/// - Rendering reads the committed window via [`Self::snapshot`] or the `for_each_row` helpers.
///
/// For debouncing and frame alignment, see the `scroll-window-adapter` crate.
#[derive(Clone, Debug)]
pub struct WindowEngine {
    options: WindowOptions,
    committed: WindowSnapshot,
    derived_buffer: Option<usize>,
}

impl WindowEngine {
    /// Creates an engine with nothing committed yet.
    pub fn new(options: WindowOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        vdebug!(
            item_count = options.item_count,
            row_height = options.row_height,
            buffer = ?options.buffer,
            "WindowEngine::new"
        );
        Ok(Self {
            options,
            committed: WindowSnapshot::default(),
            derived_buffer: None,
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options and clears the committed window.
    ///
    /// On error the engine keeps its previous options and committed state.
    pub fn set_options(&mut self, options: WindowOptions) -> Result<(), ConfigError> {
        options.validate()?;
        self.options = options;
        vtrace!(
            item_count = self.options.item_count,
            row_height = self.options.row_height,
            buffer = ?self.options.buffer,
            "WindowEngine::set_options"
        );
        self.reset();
        Ok(())
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut WindowOptions),
    ) -> Result<(), ConfigError> {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next)
    }

    /// Forgets the committed window (and any derived buffer) so the next refresh commits
    /// unconditionally.
    pub fn reset(&mut self) {
        self.committed = WindowSnapshot::default();
        self.derived_buffer = None;
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        self.committed
    }

    pub fn committed_range(&self) -> Option<IndexRange> {
        self.committed.range
    }

    pub fn rows_in_window(&self) -> usize {
        self.committed.rows_in_window
    }

    pub fn top_padding_px(&self) -> f64 {
        self.committed.top_padding_px
    }

    /// Space to leave after the last rendered row so the scroll extent matches the full list.
    pub fn bottom_padding_px(&self) -> f64 {
        let end = self.committed.rendered().end.min(self.options.item_count);
        self.options.row_height * (self.options.item_count - end) as f64
    }

    pub fn total_height_px(&self) -> f64 {
        self.options.total_height_px()
    }

    /// The buffer applied on each side: the configured one, or the one derived at the first
    /// commit.
    pub fn effective_buffer(&self) -> Option<usize> {
        self.options.buffer.or(self.derived_buffer)
    }

    pub fn is_degenerate(&self) -> bool {
        self.options.item_count == 0
    }

    /// The unbuffered visible range for `viewport`, or `None` for degenerate geometry.
    pub fn raw_range_for(&self, viewport: Viewport) -> Option<IndexRange> {
        compute_raw_range(
            viewport.scroll_top_px,
            viewport.height_px,
            self.options.row_height,
            self.options.item_count,
        )
    }

    /// Runs the refresh pipeline for `viewport`.
    ///
    /// The committed snapshot changes only when this returns [`RefreshOutcome::Committed`] or
    /// [`RefreshOutcome::Settled`].
    pub fn refresh(&mut self, viewport: Viewport) -> RefreshOutcome {
        let Some(raw) = self.raw_range_for(viewport) else {
            return self.settle_degenerate();
        };

        let committed = self.committed.range;
        let item_count = self.options.item_count;
        if !should_update(raw, committed, self.committed.rows_in_window, item_count) {
            vtrace!(start = raw.start, end = raw.end, "refresh: inside buffer");
            return RefreshOutcome::Skipped;
        }

        let expansion = expand(
            raw,
            self.effective_buffer(),
            self.options.row_height,
            item_count,
        );
        if committed == Some(expansion.range) {
            vtrace!(
                start = expansion.range.start,
                end = expansion.range.end,
                "refresh: window unchanged"
            );
            return RefreshOutcome::Unchanged;
        }

        if self.options.buffer.is_none() && self.derived_buffer.is_none() {
            self.derived_buffer = Some(expansion.buffer);
        }
        self.committed = WindowSnapshot {
            range: Some(expansion.range),
            rows_in_window: expansion.rows_in_window,
            top_padding_px: expansion.top_padding_px,
        };
        vtrace!(
            start = expansion.range.start,
            end = expansion.range.end,
            top_padding_px = expansion.top_padding_px,
            "refresh: committed"
        );
        RefreshOutcome::Committed(expansion.range)
    }

    fn settle_degenerate(&mut self) -> RefreshOutcome {
        vdebug!(
            item_count = self.options.item_count,
            policy = ?self.options.degenerate_policy,
            "refresh: degenerate geometry"
        );
        match self.options.degenerate_policy {
            DegeneratePolicy::KeepPrevious => RefreshOutcome::Suppressed,
            DegeneratePolicy::Normalize => {
                let previous = self.committed.range;
                if previous == Some(IndexRange::EMPTY) {
                    return RefreshOutcome::Unchanged;
                }
                self.committed = WindowSnapshot {
                    range: Some(IndexRange::EMPTY),
                    rows_in_window: 0,
                    top_padding_px: 0.0,
                };
                match previous {
                    Some(prev) if !prev.is_empty() => RefreshOutcome::Committed(IndexRange::EMPTY),
                    _ => RefreshOutcome::Settled,
                }
            }
        }
    }

    /// Iterates over the committed rows in ascending order, without allocations.
    pub fn for_each_row(&self, mut f: impl FnMut(WindowRow)) {
        let row_height = self.options.row_height;
        for index in self.committed.rendered().iter() {
            f(WindowRow {
                index,
                top_px: row_height * index as f64,
            });
        }
    }

    /// Collects the committed rows into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_row`]. For maximum performance,
    /// prefer `for_each_row` and reuse a scratch buffer in your adapter.
    pub fn collect_rows(&self, out: &mut Vec<WindowRow>) {
        out.clear();
        self.for_each_row(|row| out.push(row));
    }
}
