//! Bridson's dart-throwing loop over the disk inscribed in the unit square.
use std::f32::consts::SQRT_2;

use glam::Vec2;
use rand::RngCore;
use tracing::{debug, trace};

use crate::sampling::{sample_annulus, CandidatePool, SpatialGrid};

/// Center of the sampling domain.
pub const DOMAIN_CENTER: Vec2 = Vec2::new(0.5, 0.5);
/// Radius of the sampling domain.
pub const DOMAIN_RADIUS: f32 = 0.5;

/// Counters collected during one sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerStats {
    /// Outer loop iterations (one per active-point pick).
    pub iterations: usize,
    /// Candidates drawn around active points.
    pub attempts: usize,
    /// Candidates rejected for falling outside the domain disk.
    pub rejected_outside: usize,
    /// Candidates rejected for being too close to an accepted point.
    pub rejected_too_close: usize,
    /// Active points retired after exhausting their tries.
    pub retired: usize,
}

/// Single-run Poisson-disk sampler owning its grid, active list and output.
///
/// Create one per run; the sampler is consumed by [`Self::run`].
#[derive(Debug)]
pub struct PoissonDiskSampler {
    min_distance: f32,
    max_tries: usize,
    grid: SpatialGrid,
    pool: CandidatePool,
    accepted: Vec<Vec2>,
    stats: SamplerStats,
}

impl PoissonDiskSampler {
    /// Create a sampler with `grid_size` cells per axis and `max_tries` attempts per active point.
    ///
    /// The minimum distance is the cell diagonal, `sqrt(2) / grid_size`.
    pub fn new(grid_size: usize, max_tries: usize) -> Self {
        debug_assert!(grid_size > 0);
        let grid = SpatialGrid::new(grid_size);
        let min_distance = grid.cell_size() * SQRT_2;
        Self {
            min_distance,
            max_tries,
            grid,
            pool: CandidatePool::new(),
            accepted: Vec::with_capacity(grid_size * grid_size),
            stats: SamplerStats::default(),
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Points accepted so far, in acceptance order.
    pub fn accepted(&self) -> &[Vec2] {
        &self.accepted
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    fn add_point(&mut self, p: Vec2) {
        self.grid.insert(p);
        self.accepted.push(p);
        self.pool.insert(p);
    }

    fn is_adequate(&mut self, p: Vec2) -> bool {
        if p.distance(DOMAIN_CENTER) > DOMAIN_RADIUS {
            self.stats.rejected_outside += 1;
            return false;
        }
        if self.grid.has_nearby_point(p, self.min_distance) {
            self.stats.rejected_too_close += 1;
            return false;
        }
        true
    }

    /// Throw up to `max_tries` darts around `origin`, returning the first adequate one.
    fn generate_around_point(&mut self, rng: &mut dyn RngCore, origin: Vec2) -> Option<Vec2> {
        for _ in 0..self.max_tries {
            self.stats.attempts += 1;
            let candidate = sample_annulus(rng, origin, self.min_distance, 2.0 * self.min_distance);
            if self.is_adequate(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Place the initial point uniformly by area inside the domain disk.
    pub fn seed(&mut self, rng: &mut dyn RngCore) {
        let initial = sample_annulus(rng, DOMAIN_CENTER, 0.0, DOMAIN_RADIUS);
        self.add_point(initial);
    }

    /// Run one iteration: pick an active point and either grow from it or retire it.
    ///
    /// Returns `false` once the active list is empty.
    pub fn step(&mut self, rng: &mut dyn RngCore) -> bool {
        let Some((idx, selected)) = self.pool.pick_random(rng) else {
            return false;
        };
        self.stats.iterations += 1;

        match self.generate_around_point(rng, selected) {
            Some(p) => self.add_point(p),
            None => {
                self.pool.remove_at(idx);
                self.stats.retired += 1;
                trace!("retired active point ({:.4}, {:.4})", selected.x, selected.y);
            }
        }

        true
    }

    /// Seed the domain and iterate until no active points remain.
    pub fn run(mut self, rng: &mut dyn RngCore) -> (Vec<Vec2>, SamplerStats) {
        debug!(
            "Poisson disk run: grid_size={}, min_distance={:.6}, max_tries={}",
            self.grid.grid_size(),
            self.min_distance,
            self.max_tries
        );

        self.seed(rng);
        while self.step(rng) {}

        (self.accepted, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::ScriptedRng;

    fn pairwise_min_distance(points: &[Vec2]) -> f32 {
        let mut min = f32::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                min = min.min(points[i].distance(points[j]));
            }
        }
        min
    }

    #[test]
    fn sampler_derives_min_distance_from_grid_size() {
        let sampler = PoissonDiskSampler::new(15, 30);
        assert!((sampler.min_distance() - SQRT_2 / 15.0).abs() < 1e-6);
        assert_eq!(sampler.grid().grid_size(), 15);
    }

    #[test]
    fn seed_places_one_point_inside_domain() {
        let mut sampler = PoissonDiskSampler::new(15, 30);
        let mut rng = StdRng::seed_from_u64(3);
        sampler.seed(&mut rng);

        assert_eq!(sampler.accepted().len(), 1);
        assert_eq!(sampler.grid().len(), 1);
        assert!(sampler.accepted()[0].distance(DOMAIN_CENTER) <= DOMAIN_RADIUS + 1e-6);
    }

    #[test]
    fn seed_with_scripted_rng_lands_on_expected_point() {
        let mut sampler = PoissonDiskSampler::new(15, 30);
        // theta = 0, area fraction 0.25 => radius 0.5 * sqrt(0.25) = 0.25.
        let mut rng = ScriptedRng::from_unit(&[0.0, 0.25]);
        sampler.seed(&mut rng);
        let p = sampler.accepted()[0];
        assert!((p.x - 0.75).abs() < 1e-6);
        assert!((p.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn adequacy_rejects_outside_domain_and_near_points() {
        let mut sampler = PoissonDiskSampler::new(15, 30);
        sampler.add_point(DOMAIN_CENTER);

        assert!(!sampler.is_adequate(Vec2::new(0.02, 0.02)));
        assert!(!sampler.is_adequate(DOMAIN_CENTER + Vec2::new(0.05, 0.0)));
        assert!(sampler.is_adequate(DOMAIN_CENTER + Vec2::new(0.2, 0.0)));

        // The domain is a closed disk: points exactly on the rim are adequate.
        assert!(sampler.is_adequate(Vec2::new(1.0, 0.5)));
        assert!(sampler.is_adequate(Vec2::new(0.5, 0.0)));
        assert!(sampler.is_adequate(Vec2::new(0.0, 0.5)));
        assert!(!sampler.is_adequate(Vec2::new(1.001, 0.5)));

        let stats = sampler.stats();
        assert_eq!(stats.rejected_outside, 2);
        assert_eq!(stats.rejected_too_close, 1);
    }

    #[test]
    fn every_step_keeps_one_point_per_cell() {
        let mut sampler = PoissonDiskSampler::new(15, 30);
        let mut rng = StdRng::seed_from_u64(2024);
        sampler.seed(&mut rng);

        while sampler.step(&mut rng) {
            assert_eq!(sampler.grid().len(), sampler.accepted().len());
        }

        let mut cells: Vec<(usize, usize)> = sampler
            .accepted()
            .iter()
            .map(|&p| sampler.grid().cell_of(p))
            .collect();
        let total = cells.len();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), total);
    }

    #[test]
    fn run_terminates_with_separated_points_inside_domain() {
        let sampler = PoissonDiskSampler::new(15, 30);
        let min_distance = sampler.min_distance();
        let mut rng = StdRng::seed_from_u64(123);
        let (points, stats) = sampler.run(&mut rng);

        assert!(points.len() > 1);
        assert!(points.len() <= 15 * 15);
        assert!(pairwise_min_distance(&points) >= min_distance - 1e-6);
        for p in &points {
            assert!(p.distance(DOMAIN_CENTER) <= DOMAIN_RADIUS + 1e-6);
        }
        // Every accepted point is eventually retired.
        assert_eq!(stats.retired, points.len());
        assert_eq!(stats.iterations, stats.retired + points.len() - 1);
    }

    #[test]
    fn zero_tries_retires_the_seed_immediately() {
        let sampler = PoissonDiskSampler::new(15, 0);
        let mut rng = StdRng::seed_from_u64(1);
        let (points, stats) = sampler.run(&mut rng);
        assert_eq!(points.len(), 1);
        assert_eq!(stats.attempts, 0);
        assert_eq!(stats.retired, 1);
    }
}
