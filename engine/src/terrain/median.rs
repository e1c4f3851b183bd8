//! 3x3 Median Filter
//!
//! Smooths single-cell spikes left by midpoint displacement. Border cells
//! use the part of the 3x3 window that lies on the grid (6 cells on edges,
//! 4 in corners).

use super::height_grid::HeightGrid;

/// Median of a non-empty slice. Even-length input averages the two middle
/// values. The slice is sorted in place.
pub(crate) fn median(values: &mut [f32]) -> f32 {
    values.sort_unstable_by(f32::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Apply a 3x3 median filter to every cell, returning a new grid.
pub fn median_filter_3x3(src: &HeightGrid) -> HeightGrid {
    let size = src.size();
    let max = src.max_index();
    let mut dst = HeightGrid::unset(size);
    let mut window = [0.0f32; 9];

    for i in 0..size {
        let rows = i.saturating_sub(1)..=(i + 1).min(max);
        for j in 0..size {
            let cols = j.saturating_sub(1)..=(j + 1).min(max);
            let mut len = 0;
            for wi in rows.clone() {
                for wj in cols.clone() {
                    window[len] = src.get(wi, wj);
                    len += 1;
                }
            }
            dst.set(i, j, median(&mut window[..len]));
        }
    }
    dst
}
