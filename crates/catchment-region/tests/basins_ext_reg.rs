//! Tests for basin flooding on small hand-built images
//!
//! Covers tie-breaking between fronts, single rows and columns, the level budget,
//! empty markers, a full grey-level ramp and the error paths of the public
//! entry points.

use catchment_core::{Pix, PixMut, PixelDepth};
use catchment_region::basins::{FloodStats, MarkerCell, UNTOUCHED};
use catchment_region::{
    BasinsOptions, Grid, RegionError, basin_segment, basins, marker_from_points,
};

fn relief(width: u32, height: u32, values: &[u32]) -> Pix {
    let mut pm = Pix::new(width, height, PixelDepth::Bit8).unwrap().to_mut();
    for (i, &v) in values.iter().enumerate() {
        let i = i as u32;
        pm.set_pixel(i % width, i / width, v).unwrap();
    }
    pm.into()
}

fn marker(width: u32, height: u32, seeds: &[(u32, u32, u32)]) -> PixMut {
    let mut pm = Pix::new(width, height, PixelDepth::Bit32).unwrap().to_mut();
    for &(x, y, label) in seeds {
        pm.set_pixel(x, y, label).unwrap();
    }
    pm
}

fn row(pm: &PixMut, y: u32) -> Vec<u32> {
    (0..pm.width()).map(|x| pm.get_pixel(x, y).unwrap()).collect()
}

// ============================================================================
// Tie-breaking
// ============================================================================

#[test]
fn test_uniform_two_seeds_square() {
    let source = relief(3, 3, &[5; 9]);
    let mut m = marker(3, 3, &[(0, 0, 1), (2, 2, 2)]);
    basins(&source, &mut m, &BasinsOptions::default()).unwrap();

    assert_eq!(row(&m, 0), vec![1, 1, 1]);
    assert_eq!(row(&m, 1), vec![1, 1, 2]);
    assert_eq!(row(&m, 2), vec![1, 2, 2]);
}

#[test]
fn test_uniform_two_seeds_hexagonal() {
    // (0,0) on an even row touches (0,1) but not (1,1)
    let source = relief(3, 3, &[5; 9]);
    let mut m = marker(3, 3, &[(0, 0, 1), (2, 2, 2)]);
    let options = BasinsOptions::new().with_grid(Grid::Hexagonal);
    basins(&source, &mut m, &options).unwrap();

    assert_eq!(row(&m, 0), vec![1, 1, 1]);
    assert_eq!(row(&m, 1), vec![1, 2, 2]);
    assert_eq!(row(&m, 2), vec![1, 2, 2]);
}

#[test]
fn test_lower_pass_wins() {
    // The left front climbs to 9 through lower levels first
    let source = relief(7, 1, &[0, 1, 1, 2, 9, 9, 0]);
    let mut m = marker(7, 1, &[(0, 0, 1), (6, 0, 2)]);
    basins(&source, &mut m, &BasinsOptions::default()).unwrap();
    assert_eq!(row(&m, 0), vec![1, 1, 1, 1, 1, 2, 2]);
}

// ============================================================================
// Degenerate rows and columns
// ============================================================================

#[test]
fn test_single_row_grids_agree() {
    let values = [4, 2, 7, 7, 1, 0, 3, 8, 8, 2, 5, 6];
    let source = relief(12, 1, &values);
    let seeds = [(1, 0, 1), (5, 0, 2), (9, 0, 3)];

    let mut square = marker(12, 1, &seeds);
    basins(&source, &mut square, &BasinsOptions::default()).unwrap();

    let mut hex = marker(12, 1, &seeds);
    let options = BasinsOptions::new().with_grid(Grid::Hexagonal);
    basins(&source, &mut hex, &options).unwrap();

    assert_eq!(row(&square, 0), row(&hex, 0));
    assert_eq!(row(&square, 0), vec![1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3]);
}

#[test]
fn test_single_column_grids_agree() {
    // Hexagonal rows alternate between visiting N before S and S before N
    let values = [3, 0, 5, 5, 2, 6, 1, 1, 4, 7, 0, 2, 2, 9, 3];
    let source = relief(1, 15, &values);
    let seeds = [(0, 1, 1), (0, 6, 2), (0, 7, 3), (0, 10, 4)];

    let mut square = marker(1, 15, &seeds);
    basins(&source, &mut square, &BasinsOptions::default()).unwrap();

    let mut hex = marker(1, 15, &seeds);
    let options = BasinsOptions::new().with_grid(Grid::Hexagonal);
    basins(&source, &mut hex, &options).unwrap();

    assert_eq!(square.data(), hex.data());
    for &(x, y, label) in &seeds {
        assert_eq!(hex.get_pixel(x, y), Some(label));
    }
    assert!(hex.data().iter().all(|&cell| (1..=4).contains(&cell)));
}

#[test]
fn test_single_pixel() {
    let source = relief(1, 1, &[200]);
    let mut m = marker(1, 1, &[(0, 0, 9)]);
    let stats = basins(&source, &mut m, &BasinsOptions::default()).unwrap();
    assert_eq!(m.get_pixel(0, 0), Some(9));
    assert_eq!(stats.pixels_processed, 1);
}

// ============================================================================
// Level budget
// ============================================================================

#[test]
fn test_budget_one_level() {
    let source = relief(5, 1, &[0, 0, 3, 0, 0]);
    let mut m = marker(5, 1, &[(0, 0, 1)]);
    let options = BasinsOptions::new().with_max_level(1);
    let stats = basins(&source, &mut m, &options).unwrap();

    assert_eq!(stats.levels_drained, 1);
    assert_eq!(m.get_pixel(0, 0), Some(1));
    assert_eq!(m.get_pixel(1, 0), Some(1));
    // Reached but never dequeued: labeled, still pending
    assert_eq!(
        MarkerCell::from_raw(m.get_pixel(2, 0).unwrap()),
        MarkerCell::Labeled {
            label: 1,
            pending: true
        }
    );
    // Beyond the barrier
    assert_eq!(m.get_pixel(3, 0), Some(UNTOUCHED));
    assert_eq!(m.get_pixel(4, 0), Some(UNTOUCHED));
}

#[test]
fn test_budget_past_barrier() {
    let source = relief(5, 1, &[0, 0, 3, 0, 0]);
    let mut m = marker(5, 1, &[(0, 0, 1)]);
    let options = BasinsOptions::new().with_max_level(4);
    let stats = basins(&source, &mut m, &options).unwrap();

    assert_eq!(stats.levels_drained, 4);
    assert_eq!(row(&m, 0), vec![1; 5]);
}

// ============================================================================
// Empty marker
// ============================================================================

#[test]
fn test_no_seeds() {
    let source = relief(4, 2, &[1, 2, 3, 4, 5, 6, 7, 8]);
    let mut m = marker(4, 2, &[]);
    m.set_pixel(3, 1, UNTOUCHED).unwrap();
    let before = m.data().to_vec();

    let stats = basins(&source, &mut m, &BasinsOptions::default()).unwrap();
    assert_eq!(stats, FloodStats::default());
    assert_eq!(m.data(), &before[..]);
}

// ============================================================================
// Deep reliefs
// ============================================================================

#[test]
fn test_full_range_relief() {
    // Every grey level appears along a ramp
    let values: Vec<u32> = (0..256).collect();
    let source = relief(256, 1, &values);
    let mut m = marker(256, 1, &[(0, 0, 1), (255, 0, 2)]);
    let stats = basins(&source, &mut m, &BasinsOptions::default()).unwrap();

    // The high seed only claims the neighbor it tags at level 0
    assert_eq!(m.get_pixel(253, 0), Some(1));
    assert_eq!(m.get_pixel(254, 0), Some(2));
    assert_eq!(m.get_pixel(255, 0), Some(2));
    assert_eq!(stats.pixels_processed, 256);
    assert_eq!(stats.window_rollovers, 1);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_size_mismatch() {
    let source = relief(4, 4, &[0; 16]);
    let mut m = marker(4, 5, &[(0, 0, 1)]);
    let err = basins(&source, &mut m, &BasinsOptions::default()).unwrap_err();
    assert!(matches!(err, RegionError::SizeMismatch { .. }));
    // Nothing was written
    assert_eq!(m.get_pixel(1, 1), Some(0));
    assert!(err.to_string().contains("4x4"));
}

#[test]
fn test_unsupported_depths() {
    let mut m = marker(4, 4, &[(0, 0, 1)]);
    let source1 = Pix::new(4, 4, PixelDepth::Bit1).unwrap();
    assert!(matches!(
        basins(&source1, &mut m, &BasinsOptions::default()),
        Err(RegionError::UnsupportedDepth { actual: 1, .. })
    ));

    let source = relief(4, 4, &[0; 16]);
    let mut m16 = Pix::new(4, 4, PixelDepth::Bit16).unwrap().to_mut();
    assert!(matches!(
        basins(&source, &mut m16, &BasinsOptions::default()),
        Err(RegionError::UnsupportedDepth { actual: 16, .. })
    ));
    assert_eq!(m.get_pixel(1, 0), Some(0));
}

#[test]
fn test_basin_segment_keeps_input() {
    let source = relief(3, 1, &[0, 1, 2]);
    let m = marker_from_points(3, 1, &[(0, 0)]).unwrap();
    let out = basin_segment(&source, &m, &BasinsOptions::default()).unwrap();

    assert_eq!(m.get_pixel(2, 0), Some(0));
    assert_eq!(out.get_pixel(2, 0), Some(1));
    assert_eq!(out.depth(), PixelDepth::Bit32);
}
