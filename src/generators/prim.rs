use log::debug;
use rand::prelude::*;

use crate::generators::{seeded_rng, Generator};
use crate::grid::{CellState, Grid, DX, DY};

/// Frontier-growth algorithm: start from (0, 0) and repeatedly knock
/// down a uniformly random wall on the frontier, carving the cell
/// behind it if it has not been reached yet. Uniform over the current
/// frontier, not a priority scheme.
pub struct Prim;

struct Wall {
    // the wall cell itself
    x: i32,
    y: i32,
    // the lattice cell on the far side
    nx: i32,
    ny: i32,
}

impl Generator for Prim {
    fn generate(&self, grid: &mut Grid, seed: u64) {
        grid.clear();
        let mut rng = seeded_rng(seed);

        grid.set_cell(0, 0, CellState::Passage);

        let mut walls = Vec::new();
        add_walls(grid, &mut walls, 0, 0);

        while !walls.is_empty() {
            let index = rng.gen_range(0, walls.len());
            let wall = walls.swap_remove(index);

            if grid.is_wall(wall.nx, wall.ny) {
                grid.set_cell(wall.nx, wall.ny, CellState::Passage);
                grid.set_cell(wall.x, wall.y, CellState::Passage);

                add_walls(grid, &mut walls, wall.nx, wall.ny);
            }
        }

        debug!("prim: carved {}x{} maze", grid.width(), grid.height());
    }
}

// frontier walls around a freshly carved lattice cell
fn add_walls(grid: &Grid, walls: &mut Vec<Wall>, x: i32, y: i32) {
    for dir in 0..4 {
        let nx = x + DX[dir] * 2;
        let ny = y + DY[dir] * 2;

        if grid.is_valid_cell(nx, ny) && grid.is_wall(nx, ny) {
            walls.push(Wall {
                x: x + DX[dir],
                y: y + DY[dir],
                nx,
                ny,
            });
        }
    }
}
