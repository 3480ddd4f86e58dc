//! Active list of accepted points that may still spawn neighbors.
use glam::Vec2;
use rand::RngCore;

/// Unordered pool with uniform random picks and O(1) removal.
///
/// Removal swaps the target with the last element, so member order is not stable.
#[derive(Clone, Debug, Default)]
pub struct CandidatePool {
    points: Vec<Vec2>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, p: Vec2) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pick a uniformly random member without removing it.
    pub fn pick_random(&self, rng: &mut dyn RngCore) -> Option<(usize, Vec2)> {
        if self.points.is_empty() {
            return None;
        }
        let idx = crate::sampling::rand_index(rng, self.points.len());
        Some((idx, self.points[idx]))
    }

    /// Remove the member at `index` by swapping in the last element.
    pub fn remove_at(&mut self, index: usize) -> Vec2 {
        self.points.swap_remove(index)
    }

    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }
}
