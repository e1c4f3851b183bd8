//! Height Grid
//!
//! Square grid of elevations with side `2^detail + 1`.

/// Marker for cells the subdivision has not reached yet.
pub(crate) const UNSET: f32 = f32::NAN;

/// A square height-field of `size x size` elevations.
///
/// Indexed as `(i, j)` where `i` maps to model-space X and `j` to Z.
/// Storage is row-major on `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightGrid {
    size: usize,
    data: Vec<f32>,
}

impl HeightGrid {
    /// Create a grid with every cell marked unset.
    pub(crate) fn unset(size: usize) -> Self {
        Self {
            size,
            data: vec![UNSET; size * size],
        }
    }

    /// Build a grid from row-major data. `data.len()` must be `size * size`
    /// and the grid needs at least two cells per side.
    pub fn from_rows(size: usize, data: Vec<f32>) -> Option<Self> {
        if size < 2 || data.len() != size * size {
            return None;
        }
        Some(Self { size, data })
    }

    /// Grid filled with a single elevation. Needs at least two cells per
    /// side.
    pub fn flat(size: usize, height: f32) -> Option<Self> {
        if size < 2 {
            return None;
        }
        Some(Self {
            size,
            data: vec![height; size * size],
        })
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Last valid index along each axis.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.size - 1
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.size + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.data[i * self.size + j] = value;
    }

    /// Elevation at the centre cell (used for spawning the viewpoint).
    pub fn center_height(&self) -> f32 {
        let c = self.max_index() / 2;
        self.get(c, c)
    }

    /// Raw row-major elevations.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// True once every cell holds a value.
    pub fn is_complete(&self) -> bool {
        self.data.iter().all(|h| !h.is_nan())
    }

    /// `(min, max)` elevation over the whole grid.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }
}
