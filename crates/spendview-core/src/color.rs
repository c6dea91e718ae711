// File: crates/spendview-core/src/color.rs
// Summary: RGBA color type, deterministic palette generation, reveal gradient math.

use serde::{Deserialize, Serialize};

use crate::types::MAX_CATEGORIES;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { r: self.r, g: self.g, b: self.b, a }
    }
}

/// SplitMix64; enough for color picking and fully deterministic per seed.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Generate `MAX_CATEGORIES` pairwise-distinct opaque colors from a seed.
/// Rejection sampling: a candidate equal to any prior pick is re-rolled.
pub fn generate_palette(seed: u64) -> [Rgba; MAX_CATEGORIES] {
    let mut rng = SplitMix64(seed);
    let mut colors = [Rgba::opaque(0, 0, 0); MAX_CATEGORIES];
    for i in 0..MAX_CATEGORIES {
        loop {
            let bits = rng.next();
            let candidate = Rgba::opaque(
                (bits & 0xff) as u8,
                ((bits >> 8) & 0xff) as u8,
                ((bits >> 16) & 0xff) as u8,
            );
            if !colors[..i].contains(&candidate) {
                colors[i] = candidate;
                break;
            }
        }
    }
    colors
}

/// Three-stop reveal gradient: bucket color -> white -> bucket color,
/// rendered bottom-to-top over a bitmap three bar-heights tall.
pub fn reveal_gradient(color: Rgba) -> [Rgba; 3] {
    [color, Rgba::WHITE, color]
}

/// Source-slice offset into the 3x-height gradient bitmap for a given
/// bar height and percent: sweeps from 0 to 2h as percent goes 0 to 100.
pub fn gradient_offset(bar_height: f32, percent: u8) -> f32 {
    bar_height / 50.0 * f32::from(percent)
}
