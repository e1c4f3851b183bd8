//! Height Field Generator
//!
//! Midpoint displacement ("square-diamond") over a `2^detail + 1` grid,
//! followed by a 3x3 median filter.
//!
//! Displacement amplitude at each level is `roughness * step`, so it halves
//! together with the step size and the terrain stays self-similar.

use log::info;

use super::height_grid::HeightGrid;
use super::median::median_filter_3x3;
use super::random::RandomSource;
use crate::error::{EngineError, Result};

/// Largest supported detail level (4097 x 4097 cells).
pub const MAX_DETAIL: u32 = 12;

/// Fractal terrain generator driven by an injected random source.
///
/// ## Usage
/// ```rust,ignore
/// let mut generator = HeightFieldGenerator::new(RngSource::seeded(1));
/// let grid = generator.generate(7, 0.003)?;
/// assert_eq!(grid.size(), 129);
/// ```
pub struct HeightFieldGenerator<S> {
    source: S,
}

impl<S: RandomSource> HeightFieldGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate a smoothed height field of side `2^detail + 1`.
    ///
    /// Fails with `InvalidArgument` before allocating if `roughness` is not
    /// a positive finite number or `detail` exceeds [`MAX_DETAIL`].
    pub fn generate(&mut self, detail: u32, roughness: f32) -> Result<HeightGrid> {
        if !(roughness.is_finite() && roughness > 0.0) {
            return Err(EngineError::invalid(format!(
                "roughness must be positive and finite, got {roughness}"
            )));
        }
        if detail > MAX_DETAIL {
            return Err(EngineError::invalid(format!(
                "detail {detail} exceeds maximum of {MAX_DETAIL}"
            )));
        }

        let size = (1usize << detail) + 1;
        let max = size - 1;
        let mut grid = HeightGrid::unset(size);

        let corner_amp = roughness * size as f32;
        for (i, j) in [(0, 0), (max, 0), (max, max), (0, max)] {
            let h = self.source.symmetric(corner_amp);
            grid.set(i, j, h);
        }

        let mut step = max;
        while step / 2 >= 1 {
            self.subdivide(&mut grid, step, roughness);
            step /= 2;
        }
        debug_assert!(grid.is_complete());

        let grid = median_filter_3x3(&grid);
        let (lo, hi) = grid.min_max();
        info!(
            "Terrain: generated {size}x{size} height field (detail {detail}, roughness {roughness}), heights [{lo:.4}, {hi:.4}]"
        );
        Ok(grid)
    }

    /// One square phase plus one diamond phase at spacing `step`.
    fn subdivide(&mut self, grid: &mut HeightGrid, step: usize, roughness: f32) {
        let half = step / 2;
        let max = grid.max_index();
        let amp = roughness * step as f32;

        for y in (half..max).step_by(step) {
            for x in (half..max).step_by(step) {
                let offset = self.source.symmetric(amp);
                let value = offset + square_average(grid, x, y, half);
                grid.set(x, y, value);
            }
        }

        for y in (0..=max).step_by(half) {
            let start = (y + half) % step;
            for x in (start..=max).step_by(step) {
                let offset = self.source.symmetric(amp);
                let value = offset + diamond_average(grid, x, y, half);
                grid.set(x, y, value);
            }
        }
    }
}

/// Mean of the four diagonal corners of a square centre.
///
/// Square centres sit at odd multiples of `half`, so all four diagonals are
/// always on the grid.
fn square_average(grid: &HeightGrid, x: usize, y: usize, half: usize) -> f32 {
    debug_assert!(x >= half && y >= half);
    debug_assert!(x + half <= grid.max_index() && y + half <= grid.max_index());
    (grid.get(x - half, y - half)
        + grid.get(x + half, y - half)
        + grid.get(x + half, y + half)
        + grid.get(x - half, y + half))
        / 4.0
}

/// Mean of the orthogonal neighbours at distance `half` that lie on the
/// grid: 4 in the interior, 3 along an edge.
fn diamond_average(grid: &HeightGrid, x: usize, y: usize, half: usize) -> f32 {
    let max = grid.max_index();
    let neighbours = [
        (y >= half).then(|| grid.get(x, y - half)),
        (x + half <= max).then(|| grid.get(x + half, y)),
        (y + half <= max).then(|| grid.get(x, y + half)),
        (x >= half).then(|| grid.get(x - half, y)),
    ];
    let (sum, count) = neighbours
        .iter()
        .flatten()
        .fold((0.0f32, 0u32), |(sum, count), &h| (sum + h, count + 1));
    sum / count as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::random::{ConstantSource, RngSource};

    #[test]
    fn test_grid_side_is_power_of_two_plus_one() {
        let mut generator = HeightFieldGenerator::new(RngSource::seeded(3));
        for detail in 0..=5 {
            let grid = generator.generate(detail, 0.01).unwrap();
            assert_eq!(grid.size(), (1 << detail) + 1);
            assert!(grid.is_complete());
        }
    }

    #[test]
    fn test_constant_midpoint_source_gives_flat_terrain() {
        // 0.5 maps to a zero offset everywhere
        let mut generator = HeightFieldGenerator::new(ConstantSource(0.5));
        let grid = generator.generate(4, 0.05).unwrap();
        assert!(grid.as_slice().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_detail_zero_is_two_by_two() {
        let mut generator = HeightFieldGenerator::new(RngSource::seeded(9));
        let grid = generator.generate(0, 0.1).unwrap();
        assert_eq!(grid.size(), 2);
        // Every cell sees the same 4-cell window after filtering
        let first = grid.get(0, 0);
        assert!(grid.as_slice().iter().all(|&h| h == first));
    }

    #[test]
    fn test_rejects_bad_roughness_and_detail() {
        let mut generator = HeightFieldGenerator::new(ConstantSource(0.5));
        assert!(matches!(
            generator.generate(3, 0.0),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            generator.generate(3, -1.0),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            generator.generate(3, f32::NAN),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            generator.generate(MAX_DETAIL + 1, 0.01),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_diamond_edge_uses_three_neighbours() {
        let mut grid = HeightGrid::flat(3, 0.0).unwrap();
        grid.set(0, 0, 3.0);
        grid.set(2, 0, 6.0);
        grid.set(1, 1, 9.0);
        // (1, 0) on the top edge: up is off-grid, so (6 + 9 + 3) / 3
        assert_eq!(diamond_average(&grid, 1, 0, 1), 6.0);
    }

    #[test]
    fn test_displacement_bounded_by_roughness() {
        // Max possible |height| is bounded by the sum of all level amplitudes
        let roughness = 0.01;
        let detail = 6;
        let size = (1 << detail) + 1;
        let bound = roughness * (size as f32 + 2.0 * (size - 1) as f32);
        let mut generator = HeightFieldGenerator::new(RngSource::seeded(11));
        let grid = generator.generate(detail, roughness).unwrap();
        assert!(grid.as_slice().iter().all(|h| h.abs() <= bound));
    }
}
