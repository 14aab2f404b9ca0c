//! Numeric helpers shared by the layout stages.

/// Rounds half-way cases towards positive infinity (`floor(v + 0.5)`).
///
/// Vertical positions and horizontal gaps are compared after this rounding.
/// It differs from [`f64::round`] for negative halves: `-2.5` becomes `-2.0`.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Number of whole cells of `cell_width` that fit in `extent`.
///
/// Non-positive or non-finite inputs yield zero cells.
#[inline]
pub fn cell_count(extent: f64, cell_width: f64) -> usize {
    let cells = (extent / cell_width).floor();
    if cells.is_finite() && cells > 0.0 {
        cells as usize
    } else {
        0
    }
}

/// Cell index for a horizontal position, or `None` when it falls outside
/// `[0, len)`.
#[inline]
pub fn cell_index(x: f64, cell_width: f64, len: usize) -> Option<usize> {
    let idx = (x / cell_width).floor();
    if idx.is_finite() && idx >= 0.0 && idx < len as f64 {
        Some(idx as usize)
    } else {
        None
    }
}
