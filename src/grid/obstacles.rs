use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index::sample};

use super::{CellState, Grid};
use crate::errors::GridError;
use crate::geometry::Cell;


/// Parameters for random grid generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleConfig {
    pub wall_density: u8, // percent of all cells that become walls
    pub weight_density: u8, // percent of the remaining open cells that become weighted
    pub max_weight: u32, // weights are drawn from 2..=max_weight
    pub seed: Option<u64>, // None draws a fresh seed from the OS
    pub keep_clear: Vec<Cell>, // never turned into walls, typically start and goal
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            wall_density: 0,
            weight_density: 0,
            max_weight: 9,
            seed: None,
            keep_clear: Vec::new(),
        }
    }
}

impl ObstacleConfig {

    pub fn with_wall_density(mut self, percent: u8) -> Self {
        self.wall_density = percent;
        self
    }

    pub fn with_weight_density(mut self, percent: u8) -> Self {
        self.weight_density = percent;
        self
    }

    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_kept_clear(mut self, cell: Cell) -> Self {
        self.keep_clear.push(cell);
        self
    }

    fn validate(&self) -> Result<(), GridError> {
        for density in [self.wall_density, self.weight_density] {
            if density > 100 {
                return Err(GridError::InvalidDensity(density));
            }
        }
        if self.max_weight < 2 {
            return Err(GridError::InvalidWeight(self.max_weight));
        }
        Ok(())
    }
}


/// Build a random grid
/// Exactly `cells * wall_density / 100` walls are placed (rounded down), fewer only
/// when the cells kept clear leave no room. Weights are then spread over the open cells.
pub fn generate(width: usize, height: usize, config: &ObstacleConfig) -> Result<Grid, GridError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut grid = Grid::try_new(width, height)?;

    // cells that may become walls
    let candidates: Vec<usize> = (0..grid.len())
        .filter(|&index| !config.keep_clear.contains(&grid.cell_at(index)))
        .collect();

    let wall_target = (grid.len() * usize::from(config.wall_density) / 100).min(candidates.len());
    for pick in sample(&mut rng, candidates.len(), wall_target) {
        let cell = grid.cell_at(candidates[pick]);
        grid.set(cell.row, cell.col, CellState::Wall);
    }

    let open: Vec<Cell> = grid
        .iter()
        .filter(|(_, state)| state.is_walkable())
        .map(|(cell, _)| cell)
        .collect();

    let weight_target = open.len() * usize::from(config.weight_density) / 100;
    for pick in sample(&mut rng, open.len(), weight_target) {
        let cell = open[pick];
        let cost = rng.random_range(2..=config.max_weight);
        grid.set(cell.row, cell.col, CellState::Weighted(cost));
    }

    debug!(
        "generated {}x{} grid with {} walls and {} weighted cells",
        width, height, wall_target, weight_target
    );

    Ok(grid)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_count(grid: &Grid) -> usize {
        grid.iter()
            .filter(|(_, state)| matches!(state, CellState::Weighted(_)))
            .count()
    }

    #[test]
    fn test_default_config_is_open_grid() {
        let grid = generate(6, 4, &ObstacleConfig::default()).unwrap();
        assert_eq!(grid, Grid::new(6, 4));
    }

    #[test]
    fn test_exact_wall_count() {
        for density in [0u8, 10, 25, 40, 100] {
            let config = ObstacleConfig::default().with_wall_density(density).with_seed(7);
            let grid = generate(30, 30, &config).unwrap();
            assert_eq!(grid.wall_count(), 900 * usize::from(density) / 100, "density {density}");
        }
    }

    #[test]
    fn test_kept_clear_cells_stay_open() {
        let start = Cell::new(0, 0);
        let goal = Cell::new(9, 9);
        let config = ObstacleConfig::default()
            .with_wall_density(100)
            .with_seed(3)
            .with_kept_clear(start)
            .with_kept_clear(goal);

        let grid = generate(10, 10, &config).unwrap();
        assert!(grid.is_walkable(start.row, start.col));
        assert!(grid.is_walkable(goal.row, goal.col));
        assert_eq!(grid.wall_count(), 98);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let config = ObstacleConfig::default()
            .with_wall_density(30)
            .with_weight_density(50)
            .with_seed(42);
        let a = generate(20, 15, &config).unwrap();
        let b = generate(20, 15, &config).unwrap();
        assert_eq!(a, b);

        let other = generate(20, 15, &config.clone().with_seed(43)).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn test_weights_in_range() {
        let config = ObstacleConfig::default()
            .with_wall_density(20)
            .with_weight_density(50)
            .with_max_weight(4)
            .with_seed(11);
        let grid = generate(20, 20, &config).unwrap();

        // 80 walls leave 320 open cells, half of them weighted
        assert_eq!(weighted_count(&grid), 160);
        for (_, state) in grid.iter() {
            if let CellState::Weighted(cost) = state {
                assert!((2..=4).contains(&cost));
            }
        }
    }

    #[test]
    fn test_invalid_config() {
        let too_dense = ObstacleConfig::default().with_wall_density(101);
        assert_eq!(generate(3, 3, &too_dense), Err(GridError::InvalidDensity(101)));

        let light = ObstacleConfig::default().with_max_weight(1);
        assert_eq!(generate(3, 3, &light), Err(GridError::InvalidWeight(1)));

        let huge = generate(usize::MAX, 2, &ObstacleConfig::default());
        assert_eq!(huge, Err(GridError::TooLarge { width: usize::MAX, height: 2 }));
    }
}
