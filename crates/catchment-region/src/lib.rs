//! catchment-region - Catchment-basin segmentation
//!
//! This crate floods an 8 bpp relief from labeled seeds and assigns every
//! pixel to a basin:
//!
//! - **Basin flooding** - Hierarchical-queue flood on a square or hexagonal grid
//! - **Seed construction** - Marker images from points or local minima
//!
//! # Examples
//!
//! ## Flooding from explicit seeds
//!
//! ```
//! use catchment_region::{BasinsOptions, Grid, basin_segment, marker_from_points};
//! use catchment_core::{Pix, PixelDepth};
//!
//! let pix = Pix::new(8, 8, PixelDepth::Bit8).unwrap();
//! let marker = marker_from_points(8, 8, &[(0, 0), (7, 7)]).unwrap();
//!
//! let options = BasinsOptions::new().with_grid(Grid::Hexagonal);
//! let labels = basin_segment(&pix, &marker, &options).unwrap();
//! assert_eq!(labels.get_pixel(0, 1), Some(1));
//! assert_eq!(labels.get_pixel(7, 6), Some(2));
//! ```
//!
//! ## Seeding from local minima
//!
//! ```
//! use catchment_region::{BasinsOptions, Grid, basin_segment, find_local_minima, marker_from_points};
//! use catchment_core::{Pix, PixelDepth};
//!
//! let mut pm = Pix::new(6, 1, PixelDepth::Bit8).unwrap().to_mut();
//! for (x, v) in [0, 3, 9, 4, 1, 2].into_iter().enumerate() {
//!     pm.set_pixel(x as u32, 0, v).unwrap();
//! }
//! let pix: Pix = pm.into();
//!
//! let minima = find_local_minima(&pix, Grid::Square).unwrap();
//! assert_eq!(minima, vec![(0, 0), (4, 0)]);
//!
//! let marker = marker_from_points(6, 1, &minima).unwrap();
//! let labels = basin_segment(&pix, &marker, &BasinsOptions::default()).unwrap();
//! let row: Vec<u32> = (0..6).map(|x| labels.get_pixel(x, 0).unwrap()).collect();
//! assert_eq!(row, vec![1, 1, 1, 2, 2, 2]);
//! ```

pub mod basins;
pub mod error;
pub mod seeds;

// Re-export core types
pub use catchment_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export basin types and functions
pub use basins::{
    BasinsOptions, FloodStats, Grid, HierarchicalQueue, MarkerCell, UNTOUCHED, basin_segment,
    basins, label_of,
};

// Re-export seed helpers
pub use seeds::{find_local_minima, marker_from_points};
