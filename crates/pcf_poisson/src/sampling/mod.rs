//! Bridson Poisson-disk sampling over the disk inscribed in the unit square.
//!
//! The sampler is split into three pieces that share one run's lifetime:
//! - [`SpatialGrid`]: background grid with one point per cell for constant-time rejection tests
//! - [`CandidatePool`]: the active list of points that may still spawn neighbors
//! - [`PoissonDiskSampler`]: the dart-throwing loop tying both together
//!
//! Randomness is always injected as `&mut dyn RngCore` so callers and tests control the stream.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::RngCore;

pub mod candidates;
pub mod grid;
pub mod poisson_disk;

pub use candidates::CandidatePool;
pub use grid::SpatialGrid;
pub use poisson_disk::{PoissonDiskSampler, SamplerStats};

/// Scale mapping the top 24 bits of a `u32` onto `[0, 1)`.
const U24_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Generate a random float in the half-open range [0, 1).
///
/// Only the upper 24 bits are used so that every result is exactly representable
/// and the upper bound is never reached.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * U24_SCALE
}

/// Draw a uniformly random index in `0..len`.
///
/// Uses a widening multiply of a full 64-bit draw, so every index stays reachable for any
/// `len` up to `u32::MAX`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rng.next_u64() as u128 * len as u128) >> 64) as usize
}

/// Draw a point uniformly by area from the annulus `[inner, outer]` around `origin`.
///
/// The radius is `sqrt(u * (outer² - inner²) + inner²)`; taking the square root keeps
/// the density flat across the ring instead of piling up near the inner edge.
/// With `inner == 0` this samples the full disk of radius `outer`.
pub fn sample_annulus(rng: &mut dyn RngCore, origin: Vec2, inner: f32, outer: f32) -> Vec2 {
    debug_assert!(inner >= 0.0 && outer >= inner);
    let theta = rand01(rng) * TAU;
    let inner_sq = inner * inner;
    let distance = (rand01(rng) * (outer * outer - inner_sq) + inner_sq).sqrt();
    let (sin, cos) = theta.sin_cos();
    origin + Vec2::new(cos, sin) * distance
}
