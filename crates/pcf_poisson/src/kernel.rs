//! Kernel generation entry points, configuration and output.
use glam::Vec2;
use mint::Vector2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::error::{Error, Result};
use crate::sampling::poisson_disk::{DOMAIN_CENTER, DOMAIN_RADIUS};
use crate::sampling::{PoissonDiskSampler, SamplerStats};

/// Default number of grid cells per axis.
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Default number of candidates tried around an active point before it retires.
pub const DEFAULT_MAX_TRIES: usize = 30;
/// Largest accepted grid resolution.
///
/// Keeps the cell count (`grid_size²`, at most 2^24) allocatable and far from `usize` overflow.
pub const MAX_GRID_SIZE: usize = 4096;

/// Configuration for generating a Poisson-disk kernel.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Grid cells per axis. The minimum point distance is `sqrt(2) / grid_size`.
    pub grid_size: usize,
    /// Candidates tried around an active point before it is retired.
    pub max_tries: usize,
    /// Seed for a reproducible run. `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_tries: DEFAULT_MAX_TRIES,
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Creates a new [`SamplerConfig`] with the given grid resolution.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Sets the grid resolution.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the number of tries per active point.
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Edge length of one grid cell.
    pub fn cell_size(&self) -> f32 {
        1.0 / self.grid_size as f32
    }

    /// Minimum distance between any two generated points.
    pub fn min_distance(&self) -> f32 {
        self.cell_size() * std::f32::consts::SQRT_2
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// `max_tries == 0` is allowed: the run then yields only the seed point.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be > 0".into()));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(Error::InvalidConfig(format!(
                "grid_size must be <= {MAX_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }

        Ok(())
    }
}

/// Generated kernel: accepted points in acceptance order plus run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonKernel {
    points: Vec<Vec2>,
    grid_size: usize,
    stats: SamplerStats,
}

impl PoissonKernel {
    /// Raw points in `[0, 1]²`, inside the disk centered at `(0.5, 0.5)`.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Points translated so the domain center sits at the origin.
    pub fn centered(&self) -> Vec<Vec2> {
        self.points.iter().map(|&p| p - DOMAIN_CENTER).collect()
    }

    /// Centered offsets as `mint` vectors for interop with other math libraries.
    pub fn to_mint(&self) -> Vec<Vector2<f32>> {
        self.points
            .iter()
            .map(|&p| (p - DOMAIN_CENTER).into())
            .collect()
    }

    /// Centered offsets rotated by `angle` radians (the "rotated Poisson" filter pattern).
    pub fn rotated(&self, angle: f32) -> Vec<Vec2> {
        let rotation = Vec2::from_angle(angle);
        self.points
            .iter()
            .map(|&p| rotation.rotate(p - DOMAIN_CENTER))
            .collect()
    }

    /// Centered offsets scaled to a filter radius.
    ///
    /// Offsets span `[-0.5, 0.5]`, so `radius` is half the resulting kernel width.
    pub fn scaled(&self, radius: f32) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|&p| (p - DOMAIN_CENTER) * (radius / DOMAIN_RADIUS))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn cell_size(&self) -> f32 {
        1.0 / self.grid_size as f32
    }

    pub fn min_distance(&self) -> f32 {
        self.cell_size() * std::f32::consts::SQRT_2
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }
}

/// Generate a kernel using the seed in `config`, or the thread-local RNG when unset.
pub fn generate(config: &SamplerConfig) -> Result<PoissonKernel> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_with_rng(config, &mut rng)
        }
        None => {
            let mut rng = rand::rng();
            generate_with_rng(config, &mut rng)
        }
    }
}

/// Generate a kernel drawing all randomness from `rng`. `config.seed` is ignored.
pub fn generate_with_rng(config: &SamplerConfig, rng: &mut dyn RngCore) -> Result<PoissonKernel> {
    config.validate()?;

    let sampler = PoissonDiskSampler::new(config.grid_size, config.max_tries);
    let (points, stats) = sampler.run(rng);

    info!(
        "Generated {} points | attempts: {}, retired: {}, rejected (outside/too close): {}/{}.",
        points.len(),
        stats.attempts,
        stats.retired,
        stats.rejected_outside,
        stats.rejected_too_close,
    );

    Ok(PoissonKernel {
        points,
        grid_size: config.grid_size,
        stats,
    })
}
