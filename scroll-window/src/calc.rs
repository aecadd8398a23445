//! The pure stages of the refresh pipeline.
//!
//! Each function here is deterministic and side-effect free; [`crate::WindowEngine`] strings
//! them together and owns the committed state they are compared against.

use crate::IndexRange;

/// Result of widening a raw visible range by the buffer margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion {
    /// The buffered range, clamped to `[0, item_count]`.
    pub range: IndexRange,
    /// Length of the raw (unbuffered) range.
    pub rows_in_window: usize,
    /// Offset of the first rendered row within the full scroll extent.
    pub top_padding_px: f64,
    /// The buffer that was applied on each side.
    pub buffer: usize,
}

/// Computes the raw visible range for a scroll position.
///
/// Returns `None` when the geometry is degenerate: no items, or a row height that is not a
/// positive finite number. Non-finite or negative scroll offsets and viewport heights are read
/// as zero.
pub fn compute_raw_range(
    scroll_top_px: f64,
    viewport_height_px: f64,
    row_height: f64,
    item_count: usize,
) -> Option<IndexRange> {
    if item_count == 0 || !row_height.is_finite() || row_height <= 0.0 {
        return None;
    }

    let total_height = row_height * item_count as f64;
    let scroll_top = finite_or_zero(scroll_top_px).clamp(0.0, total_height);
    let viewport = finite_or_zero(viewport_height_px).max(0.0);

    // Equals (scroll_top / total_height) * item_count without the extra rounding step.
    let position = scroll_top / row_height;
    let visible_rows = ceil_to_usize(viewport / row_height);

    let start = floor_to_usize(position).min(item_count);
    let end = ceil_to_usize(position)
        .saturating_add(visible_rows)
        .min(item_count);

    Some(IndexRange { start, end })
}

/// Decides whether a freshly computed raw range warrants a new commit.
///
/// Returns `true` when nothing is committed yet, or when the raw range padded by
/// `rows_in_window` on both sides no longer fits inside the committed (buffered) range.
pub fn should_update(
    raw: IndexRange,
    committed: Option<IndexRange>,
    rows_in_window: usize,
    item_count: usize,
) -> bool {
    let Some(committed) = committed else {
        return true;
    };
    raw.start.saturating_sub(rows_in_window) < committed.start
        || raw.end.saturating_add(rows_in_window).min(item_count) > committed.end
}

/// Widens `raw` by `buffer` rows on each side.
///
/// When `buffer` is `None`, the visible row count is used, so up to three windows' worth of
/// rows end up rendered.
pub fn expand(
    raw: IndexRange,
    buffer: Option<usize>,
    row_height: f64,
    item_count: usize,
) -> Expansion {
    let rows_in_window = raw.len();
    let buffer = buffer.unwrap_or(rows_in_window);
    let leading = raw.start.saturating_sub(buffer);

    Expansion {
        range: IndexRange {
            start: leading.min(item_count),
            end: raw.end.saturating_add(buffer).min(item_count),
        },
        rows_in_window,
        top_padding_px: row_height * leading as f64,
        buffer,
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

// Callers only pass non-negative values, so truncation is floor. Casts saturate.
fn floor_to_usize(v: f64) -> usize {
    v as usize
}

fn ceil_to_usize(v: f64) -> usize {
    let t = v as usize;
    if (t as f64) < v { t.saturating_add(1) } else { t }
}
