//! Seed construction
//!
//! Helpers that build marker images for [`crate::basins`], either from an
//! explicit list of points or from the local minima of the relief itself.

use crate::basins::{Grid, MAX_LABEL};
use crate::error::{RegionError, RegionResult};
use catchment_core::pix::get_data_byte;
use catchment_core::{Pix, PixelDepth};

/// Build a 32 bpp marker image with one seed per point.
///
/// The seed at `points[i]` gets label `i + 1`; every other cell is 0.
///
/// # Errors
///
/// - [`RegionError::InvalidParameters`] if there are more points than labels
/// - [`RegionError::InvalidSeed`] if a point lies outside the image
pub fn marker_from_points(width: u32, height: u32, points: &[(u32, u32)]) -> RegionResult<Pix> {
    if points.len() > MAX_LABEL as usize {
        return Err(RegionError::InvalidParameters(format!(
            "{} seeds exceed the label range 1..={}",
            points.len(),
            MAX_LABEL
        )));
    }

    let mut marker = Pix::new(width, height, PixelDepth::Bit32)?
        .try_into_mut()
        .or_else(|shared| shared.try_to_mut())?;
    for (label, &(x, y)) in (1u32..).zip(points) {
        if x >= width || y >= height {
            return Err(RegionError::InvalidSeed { x, y });
        }
        marker.set_pixel_unchecked(x, y, label);
    }
    Ok(marker.into())
}

/// Find the local minima of an 8 bpp image.
///
/// A pixel is a minimum when its value is not greater than any of its
/// in-range neighbors on `grid`. Flat regions therefore yield every pixel
/// of the plateau. Positions are returned in raster order.
pub fn find_local_minima(pix: &Pix, grid: Grid) -> RegionResult<Vec<(u32, u32)>> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(RegionError::UnsupportedDepth {
            expected: "8-bit",
            actual: pix.depth().bits(),
        });
    }

    let w = pix.width();
    let h = pix.height();
    let mut minima = Vec::new();

    for y in 0..h {
        let line = pix.row_data(y);
        for x in 0..w {
            let val = get_data_byte(line, x);
            let is_min = grid
                .neighbors(x, y, w, h)
                .all(|(nx, ny)| val <= get_data_byte(pix.row_data(ny), nx));
            if is_min {
                minima.push((x, y));
            }
        }
    }

    Ok(minima)
}
