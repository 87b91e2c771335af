//! Synthetic reliefs for regression tests

use catchment_core::{Pix, PixelDepth};

/// Small deterministic generator, so reliefs are identical on every run
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        ((self.next_u64() >> 32) % u64::from(bound)) as u32
    }
}

/// 8 bpp image of uniform random grey levels in `0..levels`.
pub fn random_relief(width: u32, height: u32, levels: u32, seed: u64) -> Pix {
    let mut rng = Lcg::new(seed);
    let mut pm = Pix::new(width, height, PixelDepth::Bit8)
        .expect("relief dimensions must be non-zero")
        .to_mut();
    for y in 0..height {
        for x in 0..width {
            pm.set_pixel_unchecked(x, y, rng.below(levels.clamp(1, 256)));
        }
    }
    pm.into()
}

/// 8 bpp sum of sines and cosines, giving a smooth landscape with many
/// basins. `variant` selects one of two frequency sets.
pub fn wave_relief(width: u32, height: u32, variant: u32) -> Pix {
    let (fy1, fy2, fx1, fx2) = if variant == 0 {
        (0.0438f32, 0.0712, 0.0561, 0.0327)
    } else {
        (0.0238f32, 0.0312, 0.0261, 0.0207)
    };

    let mut pm = Pix::new(width, height, PixelDepth::Bit8)
        .expect("relief dimensions must be non-zero")
        .to_mut();
    for i in 0..height {
        for j in 0..width {
            let fi = i as f32;
            let fj = j as f32;
            let f = 128.0
                + 26.3 * (fy1 * fi).sin()
                + 33.4 * (fy2 * fi).cos()
                + 18.6 * (fx1 * fj).sin()
                + 23.6 * (fx2 * fj).cos();
            pm.set_pixel_unchecked(j, i, f.clamp(0.0, 255.0) as u32);
        }
    }
    pm.into()
}
