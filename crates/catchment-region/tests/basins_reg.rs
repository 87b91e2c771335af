//! Catchment-basin regression test
//!
//! Floods smooth synthetic reliefs from their local minima and random
//! reliefs from random seeds on both grids, then checks the structural
//! properties every segmentation must have:
//!
//! 1. every pixel carries a label of one of the seeds, with no flag bits
//! 2. every seed keeps its own label
//! 3. every basin is connected on the grid and contains its seed
//! 4. every pixel leaves the queue exactly once
//! 5. repeated runs agree, and flooding a finished segmentation is a no-op
//!
//! Run with:
//! ```
//! cargo test -p catchment-region --test basins_reg
//! ```

use std::collections::VecDeque;

use catchment_core::Pix;
use catchment_region::{
    BasinsOptions, Grid, basin_segment, basins, find_local_minima, marker_from_points,
};
use catchment_test::{Lcg, RegParams, random_relief, wave_relief};

/// Count pixels not reachable from their basin's seed through pixels of the
/// same label.
fn disconnected_pixels(labels: &Pix, seeds: &[(u32, u32)], grid: Grid) -> u64 {
    let w = labels.width();
    let h = labels.height();
    let mut seen = vec![false; (w * h) as usize];
    let mut queue = VecDeque::new();

    for &(x, y) in seeds {
        seen[(y * w + x) as usize] = true;
        queue.push_back((x, y));
    }
    while let Some((x, y)) = queue.pop_front() {
        let label = labels.get_pixel(x, y).unwrap();
        for (nx, ny) in grid.neighbors(x, y, w, h) {
            let idx = (ny * w + nx) as usize;
            if !seen[idx] && labels.get_pixel(nx, ny) == Some(label) {
                seen[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    seen.iter().filter(|&&s| !s).count() as u64
}

fn do_basins(rp: &mut RegParams, pixs: &Pix, seeds: &[(u32, u32)], grid: Grid) -> Pix {
    let w = pixs.width();
    let h = pixs.height();
    let nseeds = seeds.len() as u32;
    eprintln!("  {:?} grid, {} seeds", grid, nseeds);

    let marker = marker_from_points(w, h, seeds).expect("marker_from_points failed");
    let options = BasinsOptions::new().with_grid(grid);

    let mut labels = marker.to_mut();
    let stats = basins(pixs, &mut labels, &options).expect("basins failed");
    let labels: Pix = labels.into();
    rp.display_labels(&format!("{:?}", grid), &labels);

    // -- Coverage: every label is a seed label, no flag bits remain --
    let mut bad = 0u64;
    for y in 0..h {
        for x in 0..w {
            let v = labels.get_pixel(x, y).unwrap();
            if v == 0 || v > nseeds {
                bad += 1;
            }
        }
    }
    rp.compare_values(0.0, bad as f64, 0.0);

    // -- Seeds keep their labels --
    let moved = seeds
        .iter()
        .zip(1u32..)
        .filter(|&(&(x, y), label)| labels.get_pixel(x, y) != Some(label))
        .count();
    rp.compare_values(0.0, moved as f64, 0.0);

    // -- Basins are connected --
    rp.compare_values(0.0, disconnected_pixels(&labels, seeds, grid) as f64, 0.0);

    // -- Each pixel processed once --
    rp.compare_values((w * h) as f64, stats.pixels_processed as f64, 0.0);

    // -- Determinism --
    let again = basin_segment(pixs, &marker, &options).expect("basin_segment failed");
    rp.compare_pix(&labels, &again);

    // -- Flooding a full segmentation changes nothing --
    let refilled = basin_segment(pixs, &labels, &options).expect("basin_segment failed");
    rp.compare_pix(&labels, &refilled);

    labels
}

#[test]
fn basins_wave_reliefs() {
    let mut rp = RegParams::new("basins");

    for variant in 0..2 {
        eprintln!("=== Wave relief {} ===", variant);
        let pixs = wave_relief(200, 160, variant);
        for grid in [Grid::Square, Grid::Hexagonal] {
            let minima = find_local_minima(&pixs, grid).expect("find_local_minima failed");
            rp.compare_values(1.0, if minima.is_empty() { 0.0 } else { 1.0 }, 0.0);
            let _ = do_basins(&mut rp, &pixs, &minima, grid);
        }
    }

    assert!(rp.cleanup(), "basins regression test failed");
}

#[test]
fn basins_random_reliefs() {
    let mut rp = RegParams::new("basins_random");
    let mut rng = Lcg::new(0x5eed);

    for (i, (w, h, levels)) in [(64, 48, 256), (33, 17, 4), (1, 40, 16), (40, 1, 16)]
        .into_iter()
        .enumerate()
    {
        eprintln!("=== Random relief {}: {}x{}, {} levels ===", i, w, h, levels);
        let pixs = random_relief(w, h, levels, i as u64 + 1);

        // Distinct random seed positions
        let mut seeds = Vec::new();
        let mut used = vec![false; (w * h) as usize];
        for _ in 0..(w * h / 20).max(2) {
            let (x, y) = (rng.below(w), rng.below(h));
            if !std::mem::replace(&mut used[(y * w + x) as usize], true) {
                seeds.push((x, y));
            }
        }

        let square = do_basins(&mut rp, &pixs, &seeds, Grid::Square);
        let hex = do_basins(&mut rp, &pixs, &seeds, Grid::Hexagonal);

        // A single row or column has the same adjacency on both grids
        if w == 1 || h == 1 {
            rp.compare_pix(&square, &hex);
        }
    }

    assert!(rp.cleanup(), "basins random regression test failed");
}

#[test]
fn basins_single_seed_fills_image() {
    let mut rp = RegParams::new("basins_single");
    let pixs = wave_relief(120, 90, 1);

    for grid in [Grid::Square, Grid::Hexagonal] {
        let marker = marker_from_points(120, 90, &[(60, 45)]).unwrap();
        let options = BasinsOptions::new().with_grid(grid);
        let labels = basin_segment(&pixs, &marker, &options).unwrap();

        let mut ones = 0u64;
        for y in 0..90 {
            for x in 0..120 {
                if labels.get_pixel(x, y) == Some(1) {
                    ones += 1;
                }
            }
        }
        rp.compare_values((120 * 90) as f64, ones as f64, 0.0);
    }

    assert!(rp.cleanup(), "basins single-seed regression test failed");
}
