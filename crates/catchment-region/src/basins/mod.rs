//! Catchment-basin segmentation
//!
//! Floods an 8 bpp relief from the labeled seeds of a 32 bpp marker image.
//! Every pixel receives the label of the first basin that reaches it; no
//! watershed line is drawn between basins, which makes this transform
//! cheaper than a full watershed when only the regions are needed.
//!
//! The marker image is modified in place. Its cells use the layout
//! described in [`marker`]: seeds are cells with a non-zero label, every
//! other cell is marked untouched before flooding starts.
//!
//! # Example
//!
//! ```
//! use catchment_core::{Pix, PixelDepth};
//! use catchment_region::basins::{basins, BasinsOptions, Grid};
//!
//! let source = Pix::new(3, 3, PixelDepth::Bit8).unwrap();
//! let mut marker = Pix::new(3, 3, PixelDepth::Bit32).unwrap().to_mut();
//! marker.set_pixel(0, 0, 1).unwrap();
//! marker.set_pixel(2, 2, 2).unwrap();
//!
//! let options = BasinsOptions::new().with_grid(Grid::Square);
//! basins(&source, &mut marker, &options).unwrap();
//! assert_eq!(marker.get_pixel(1, 0), Some(1));
//! assert_eq!(marker.get_pixel(2, 1), Some(2));
//! ```

pub mod flood;
pub mod hqueue;
pub mod marker;
pub mod neighbors;

pub use flood::{FloodDriver, FloodState, FloodStats};
pub use hqueue::{BUCKET_COUNT, HierarchicalQueue};
pub use marker::{LABEL_MASK, MAX_LABEL, MarkerCell, PENDING_FLAG, UNTOUCHED, label_of};
pub use neighbors::Grid;

use crate::error::{RegionError, RegionResult};
use catchment_core::pix::get_data_byte;
use catchment_core::{Pix, PixMut, PixelDepth};

/// Options for basin segmentation
#[derive(Debug, Clone, Default)]
pub struct BasinsOptions {
    /// Number of grey levels to flood; 0 floods until no work is left
    pub max_level: u32,
    /// Grid used to connect pixels
    pub grid: Grid,
}

impl BasinsOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level budget (0 = unbounded)
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Set the grid
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }
}

/// Segment `source` into catchment basins grown from the seeds of `marker`.
///
/// # Arguments
///
/// * `source` - 8 bpp relief to flood
/// * `marker` - 32 bpp marker image; seeds are cells with a non-zero label.
///   Overwritten with the segmentation.
/// * `options` - Level budget and grid
///
/// # Returns
///
/// Counters describing the flood. A marker without seeds is left unchanged
/// and yields default counters.
///
/// # Errors
///
/// - [`RegionError::SizeMismatch`] if the images differ in size
/// - [`RegionError::UnsupportedDepth`] if `source` is not 8 bpp or `marker`
///   is not 32 bpp
/// - [`RegionError::OutOfMemory`] if the working state cannot be allocated
///
/// The marker image is not modified when an error is returned.
pub fn basins(
    source: &Pix,
    marker: &mut PixMut,
    options: &BasinsOptions,
) -> RegionResult<FloodStats> {
    if !source.dims_equal(marker) {
        return Err(RegionError::SizeMismatch {
            expected: (source.width(), source.height()),
            actual: (marker.width(), marker.height()),
        });
    }
    if source.depth() != PixelDepth::Bit8 {
        return Err(RegionError::UnsupportedDepth {
            expected: "8-bit",
            actual: source.depth().bits(),
        });
    }
    if marker.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit",
            actual: marker.depth().bits(),
        });
    }

    let width = source.width();
    let height = source.height();
    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(RegionError::OutOfMemory { bytes: usize::MAX })?;
    let mut queue = HierarchicalQueue::new(pixel_count)?;

    let seed_count = count_seeds(marker);
    log::debug!(
        "basins: {}x{}, {:?} grid, max_level {}, {} seeds",
        width,
        height,
        options.grid,
        options.max_level,
        seed_count
    );
    if seed_count == 0 {
        return Ok(FloodStats::default());
    }

    let mut driver = FloodDriver::new(options.max_level);
    driver.seed(&mut queue, |queue| seed_queue(queue, marker));

    let grid = options.grid;
    let stats = driver.run(
        &mut queue,
        |index| level_at(source, width, index),
        |queue, index| grid.insert_neighbors(queue, marker, source, index),
    );

    log::debug!("basins: done, {:?}", stats);
    Ok(stats)
}

/// Segment into a copy of `marker`, leaving the input untouched.
///
/// See [`basins`] for the meaning of the arguments and errors. Failing to
/// allocate the copy is reported as [`RegionError::OutOfMemory`].
pub fn basin_segment(source: &Pix, marker: &Pix, options: &BasinsOptions) -> RegionResult<Pix> {
    let mut output = marker.try_to_mut()?;
    basins(source, &mut output, options)?;
    Ok(output.into())
}

fn count_seeds(marker: &PixMut) -> usize {
    (0..marker.height())
        .map(|y| {
            marker
                .row_data(y)
                .iter()
                .filter(|&&cell| label_of(cell) != 0)
                .count()
        })
        .sum()
}

/// Queue every seed at level 0 in raster order and mark the rest untouched.
fn seed_queue(queue: &mut HierarchicalQueue, marker: &mut PixMut) -> u64 {
    let width = marker.width() as usize;
    let mut queued = 0;
    for y in 0..marker.height() {
        let row = marker.row_data_mut(y);
        for (x, cell) in row.iter_mut().enumerate() {
            if label_of(*cell) != 0 {
                queue.insert(y as usize * width + x, 0);
                queued += 1;
            } else {
                *cell = UNTOUCHED;
            }
        }
    }
    queued
}

#[inline]
fn level_at(source: &Pix, width: u32, index: usize) -> u32 {
    let x = (index % width as usize) as u32;
    let y = (index / width as usize) as u32;
    get_data_byte(source.row_data(y), x)
}
