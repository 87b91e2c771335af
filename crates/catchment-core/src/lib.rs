//! Catchment Core - Image container for basin segmentation
//!
//! This crate provides the image abstraction shared by the segmentation
//! crates:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`PixelDepth`] - Declared bits per pixel
//! - Word-packed row accessors (`get_data_*` / `set_data_*`)
//!
//! Rows are stored as 32-bit words with a fixed per-row stride (`wpl`,
//! words per line), so every row can be addressed independently.

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth};
