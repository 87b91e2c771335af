//! Catchment - Catchment-basin segmentation for Rust
//!
//! Splits a greyscale relief into basins by flooding it from labeled seeds.
//! Every pixel is assigned to exactly one basin; no watershed lines are
//! produced.
//!
//! # Overview
//!
//! - Image containers with packed pixel storage ([`Pix`], [`PixMut`])
//! - Hierarchical-queue flooding on square or hexagonal grids
//!   ([`region::basins`])
//! - Seed construction from points or local minima ([`region::seeds`])
//!
//! # Example
//!
//! ```
//! use catchment::{Pix, PixelDepth};
//! use catchment::region::{BasinsOptions, basin_segment, marker_from_points};
//!
//! let relief = Pix::new(64, 48, PixelDepth::Bit8).unwrap();
//! let marker = marker_from_points(64, 48, &[(5, 5), (60, 40)]).unwrap();
//!
//! let labels = basin_segment(&relief, &marker, &BasinsOptions::default()).unwrap();
//! assert_eq!(labels.get_pixel(0, 0), Some(1));
//! assert_eq!(labels.get_pixel(63, 47), Some(2));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use catchment_core::*;

// Re-export the segmentation crate as a module
pub use catchment_region as region;
