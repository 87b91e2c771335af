//! Neighbor strategies
//!
//! The flood propagates labels along one of two fixed grids:
//!
//! - **Square**: 8-connectivity, the same offsets on every row.
//! - **Hexagonal**: 6-connectivity on a brick lattice where odd rows are
//!   shifted half a pixel to the right, so the offsets depend on row parity.
//!
//! Offsets are listed clockwise starting from the upper neighbor; this order
//! decides which basin wins a pixel discovered by two fronts at once.

use super::hqueue::HierarchicalQueue;
use super::marker::{LABEL_MASK, UNTOUCHED};
use catchment_core::pix::get_data_byte;
use catchment_core::{Pix, PixMut};

/// Square grid offsets: N, NE, E, SE, S, SW, W, NW
const SQUARE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Hexagonal grid offsets, indexed by row parity
const HEXAGONAL_OFFSETS: [[(i32, i32); 6]; 2] = [
    // even rows
    [(0, -1), (1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1)],
    // odd rows
    [(1, -1), (1, 0), (1, 1), (0, 1), (-1, 0), (0, -1)],
];

/// Grid used to connect pixels during flooding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grid {
    /// 8-connected square grid
    #[default]
    Square,
    /// 6-connected hexagonal grid
    Hexagonal,
}

impl Grid {
    /// Number of neighbors of an interior pixel.
    pub fn neighbor_count(self) -> usize {
        match self {
            Grid::Square => SQUARE_OFFSETS.len(),
            Grid::Hexagonal => HEXAGONAL_OFFSETS[0].len(),
        }
    }

    /// Neighbor offsets for a pixel on row `y`.
    #[inline]
    pub fn offsets(self, y: u32) -> &'static [(i32, i32)] {
        match self {
            Grid::Square => &SQUARE_OFFSETS,
            Grid::Hexagonal => &HEXAGONAL_OFFSETS[(y & 1) as usize],
        }
    }

    /// In-range neighbors of `(x, y)` in a `width` x `height` image.
    pub fn neighbors(
        self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> impl Iterator<Item = (u32, u32)> {
        self.offsets(y).iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < width && ny < height).then_some((nx, ny))
        })
    }

    /// Process a pixel just taken from the queue.
    ///
    /// Clears the pixel's pending flag, then every untouched neighbor is
    /// queued at its source grey level and inherits the pixel's label.
    /// Tagged neighbors are never overwritten.
    pub(crate) fn insert_neighbors(
        self,
        queue: &mut HierarchicalQueue,
        marker: &mut PixMut,
        source: &Pix,
        index: usize,
    ) {
        let width = marker.width();
        let height = marker.height();
        let x = (index % width as usize) as u32;
        let y = (index / width as usize) as u32;

        let tag = {
            let cell = &mut marker.row_data_mut(y)[x as usize];
            *cell &= LABEL_MASK;
            *cell
        };

        for (nx, ny) in self.neighbors(x, y, width, height) {
            let cell = &mut marker.row_data_mut(ny)[nx as usize];
            if *cell == UNTOUCHED {
                let value = get_data_byte(source.row_data(ny), nx);
                queue.insert(ny as usize * width as usize + nx as usize, value);
                *cell |= tag;
            }
        }
    }
}
