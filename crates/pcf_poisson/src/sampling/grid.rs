//! Background acceleration grid over the unit square.
use glam::Vec2;

/// Cell offsets scanned around a query point in each axis.
///
/// Two cells suffice while the minimum distance equals the cell diagonal.
const NEIGHBORHOOD: isize = 2;

/// Square grid of `grid_size × grid_size` cells covering `[0, 1]²`, each holding at most one point.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    grid_size: usize,
    cell_size: f32,
    cells: Vec<Option<Vec2>>,
    occupied: usize,
}

impl SpatialGrid {
    /// Create an empty grid with `grid_size` cells per axis.
    pub fn new(grid_size: usize) -> Self {
        debug_assert!(grid_size > 0);
        Self {
            grid_size,
            cell_size: 1.0 / grid_size as f32,
            cells: vec![None; grid_size * grid_size],
            occupied: 0,
        }
    }

    /// Number of cells along each axis.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Edge length of one cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        j * self.grid_size + i
    }

    /// Point stored in cell `(i, j)`, if any.
    pub fn get(&self, i: usize, j: usize) -> Option<Vec2> {
        if i < self.grid_size && j < self.grid_size {
            self.cells[self.index(i, j)]
        } else {
            None
        }
    }

    /// Cell indices containing `p`.
    ///
    /// Coordinates on the closed upper boundary (`x == 1.0` or `y == 1.0`) land in the last
    /// column/row.
    #[inline]
    pub fn cell_of(&self, p: Vec2) -> (usize, usize) {
        let max = self.grid_size as isize - 1;
        let i = ((p.x / self.cell_size).floor() as isize).clamp(0, max) as usize;
        let j = ((p.y / self.cell_size).floor() as isize).clamp(0, max) as usize;
        (i, j)
    }

    /// Store `p` in its cell.
    ///
    /// The caller must have checked `p` against [`Self::has_nearby_point`]; the
    /// one-point-per-cell invariant is not re-verified in release builds.
    pub fn insert(&mut self, p: Vec2) {
        let (i, j) = self.cell_of(p);
        let idx = self.index(i, j);
        debug_assert!(
            self.cells[idx].is_none(),
            "cell ({i}, {j}) already holds a point"
        );
        if self.cells[idx].replace(p).is_none() {
            self.occupied += 1;
        }
    }

    /// Whether any stored point lies strictly closer than `min_distance` to `p`.
    ///
    /// Scans the 5×5 block of cells centered on `p`'s cell, skipping indices outside the grid.
    pub fn has_nearby_point(&self, p: Vec2, min_distance: f32) -> bool {
        let (ci, cj) = self.cell_of(p);
        let min_distance_squared = min_distance * min_distance;
        let size = self.grid_size as isize;

        for dj in -NEIGHBORHOOD..=NEIGHBORHOOD {
            let j = cj as isize + dj;
            if j < 0 || j >= size {
                continue;
            }
            for di in -NEIGHBORHOOD..=NEIGHBORHOOD {
                let i = ci as isize + di;
                if i < 0 || i >= size {
                    continue;
                }
                if let Some(existing) = self.cells[self.index(i as usize, j as usize)] {
                    if p.distance_squared(existing) < min_distance_squared {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Iterate over occupied cells as `((i, j), point)`.
    pub fn occupied(&self) -> impl Iterator<Item = ((usize, usize), Vec2)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|p| ((idx % self.grid_size, idx / self.grid_size), p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = SpatialGrid::new(15);
        assert!(grid.is_empty());
        assert_eq!(grid.grid_size(), 15);
        assert!((grid.cell_size() - 1.0 / 15.0).abs() < f32::EPSILON);
        assert_eq!(grid.occupied().count(), 0);
    }

    #[test]
    fn cell_of_floors_and_clamps() {
        let grid = SpatialGrid::new(10);
        assert_eq!(grid.cell_of(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(grid.cell_of(Vec2::new(0.15, 0.95)), (1, 9));
        assert_eq!(grid.cell_of(Vec2::new(1.0, 1.0)), (9, 9));
        assert_eq!(grid.cell_of(Vec2::new(-1e-7, 0.55)), (0, 5));
    }

    #[test]
    fn insert_stores_point_in_its_cell() {
        let mut grid = SpatialGrid::new(10);
        let p = Vec2::new(0.42, 0.17);
        grid.insert(p);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(4, 1), Some(p));
        assert_eq!(grid.get(1, 4), None);
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![((4, 1), p)]);
    }

    #[test]
    fn nearby_query_respects_min_distance() {
        let mut grid = SpatialGrid::new(10);
        let min_distance = grid.cell_size() * std::f32::consts::SQRT_2;
        grid.insert(Vec2::new(0.5, 0.5));

        assert!(grid.has_nearby_point(Vec2::new(0.55, 0.5), min_distance));
        assert!(grid.has_nearby_point(Vec2::new(0.5, 0.5 + min_distance * 0.99), min_distance));
        assert!(!grid.has_nearby_point(Vec2::new(0.5, 0.5 + min_distance * 1.01), min_distance));
        assert!(!grid.has_nearby_point(Vec2::new(0.9, 0.9), min_distance));

        // Exactly `min_distance` away is allowed; only strictly closer points conflict.
        // 0.25² is exact in f32, so the squared comparison sees equality.
        assert!(!grid.has_nearby_point(Vec2::new(0.5, 0.75), 0.25));
        assert!(!grid.has_nearby_point(Vec2::new(0.75, 0.5), 0.25));
        assert!(grid.has_nearby_point(Vec2::new(0.5, 0.74), 0.25));
    }

    #[test]
    fn nearby_query_reaches_two_cells_away() {
        let mut grid = SpatialGrid::new(10);
        // Two cells apart horizontally but only 0.11 apart with a min distance of ~0.141.
        grid.insert(Vec2::new(0.395, 0.5));
        let min_distance = grid.cell_size() * std::f32::consts::SQRT_2;
        assert!(grid.has_nearby_point(Vec2::new(0.505, 0.5), min_distance));
    }

    #[test]
    fn nearby_query_near_edges_skips_out_of_range_cells() {
        let mut grid = SpatialGrid::new(5);
        grid.insert(Vec2::new(0.01, 0.01));
        grid.insert(Vec2::new(0.99, 0.99));
        let min_distance = grid.cell_size() * std::f32::consts::SQRT_2;

        assert!(grid.has_nearby_point(Vec2::new(0.0, 0.0), min_distance));
        assert!(grid.has_nearby_point(Vec2::new(1.0, 1.0), min_distance));
        assert!(!grid.has_nearby_point(Vec2::new(0.0, 1.0), min_distance));
    }

    #[test]
    fn single_cell_grid_scans_only_itself() {
        let mut grid = SpatialGrid::new(1);
        grid.insert(Vec2::new(0.5, 0.5));
        assert!(grid.has_nearby_point(Vec2::new(0.9, 0.9), std::f32::consts::SQRT_2));
    }
}
